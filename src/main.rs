// STD Dependencies -----------------------------------------------------------
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;


// External Dependencies ------------------------------------------------------
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;


// Internal Dependencies ------------------------------------------------------
use htree::paths::default_output;
use htree::{files, CodecConfig, OperationReport, Result};


// CLI Interface --------------------------------------------------------------
#[derive(Parser)]
#[command(name = "htree", version, about = "Huffman file compressor with reusable tree files")]
struct Cli {
    /// TOML file with buffer size and default extensions
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output, repeat for more detail
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress INPUT into OUTPUT (default: INPUT with a .huf extension)
    #[command(visible_alias = "e")]
    Encode { input: PathBuf, output: Option<PathBuf> },

    /// Decompress INPUT into OUTPUT
    #[command(visible_alias = "d")]
    Decode { input: PathBuf, output: PathBuf },

    /// Write the tree of INPUT to OUTPUT (default: INPUT with a .htree extension)
    #[command(visible_alias = "t")]
    Tree { input: PathBuf, output: Option<PathBuf> },

    /// Compress INPUT with the prebuilt TREE file
    #[command(visible_alias = "et")]
    EncodeWithTree {
        input: PathBuf,
        tree: PathBuf,
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start = Instant::now();
    match run(cli) {
        Ok(report) => {
            println!(
                "Time: {:.3} seconds. {} bytes in / {} bytes out",
                start.elapsed().as_secs_f64(),
                report.bytes_in,
                report.bytes_out
            );
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_module("htree", level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(cli: Cli) -> Result<OperationReport> {
    let config = match &cli.config {
        Some(path) => CodecConfig::load(path)?,
        None => CodecConfig::default(),
    };

    match cli.command {
        Command::Encode { input, output } => {
            let output = output_or(&input, output, &config.compressed_extension);
            files::encode(&input, &output, &config)
        }
        Command::Decode { input, output } => files::decode(&input, &output, &config),
        Command::Tree { input, output } => {
            let output = output_or(&input, output, &config.tree_extension);
            files::make_tree(&input, &output, &config)
        }
        Command::EncodeWithTree { input, tree, output } => {
            let output = output_or(&input, output, &config.compressed_extension);
            files::encode_with_tree(&input, &tree, &output, &config)
        }
    }
}

fn output_or(input: &Path, output: Option<PathBuf>, extension: &str) -> PathBuf {
    output.unwrap_or_else(|| default_output(input, extension))
}
