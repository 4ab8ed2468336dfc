//! Path-level operations: open the files, check they are distinct, run the
//! codec and make sure the output reaches the disk.
//!
//! Nothing is cleaned up on failure. A failed operation may leave a
//! truncated output file behind, which must not be trusted.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::config::CodecConfig;
use crate::error::Result;
use crate::huffman_codec::{HuffmanCodec, OperationReport};
use crate::paths::ensure_distinct;

pub fn encode(input: &Path, output: &Path, config: &CodecConfig) -> Result<OperationReport> {
    ensure_distinct(&[input, output])?;
    let mut reader = open(input)?;
    let mut writer = create(output)?;
    let report = HuffmanCodec::encode_file(&mut reader, &mut writer, config)?;
    finish(writer)?;
    info!("encoded {} into {}", input.display(), output.display());
    Ok(report)
}

pub fn decode(input: &Path, output: &Path, config: &CodecConfig) -> Result<OperationReport> {
    ensure_distinct(&[input, output])?;
    let mut reader = open(input)?;
    let mut writer = create(output)?;
    let report = HuffmanCodec::decode_file(&mut reader, &mut writer, config)?;
    finish(writer)?;
    info!("decoded {} into {}", input.display(), output.display());
    Ok(report)
}

pub fn make_tree(input: &Path, output: &Path, config: &CodecConfig) -> Result<OperationReport> {
    ensure_distinct(&[input, output])?;
    let mut reader = open(input)?;
    let mut writer = create(output)?;
    let report = HuffmanCodec::make_tree(&mut reader, &mut writer, config)?;
    finish(writer)?;
    info!("wrote tree of {} to {}", input.display(), output.display());
    Ok(report)
}

pub fn encode_with_tree(
    input: &Path,
    tree: &Path,
    output: &Path,
    config: &CodecConfig,
) -> Result<OperationReport> {
    ensure_distinct(&[input, tree, output])?;
    let mut reader = open(input)?;
    let mut tree_reader = open(tree)?;
    let mut writer = create(output)?;
    let report = HuffmanCodec::encode_with_tree(&mut reader, &mut tree_reader, &mut writer, config)?;
    finish(writer)?;
    info!(
        "encoded {} with tree {} into {}",
        input.display(),
        tree.display(),
        output.display()
    );
    Ok(report)
}

fn open(path: &Path) -> io::Result<File> {
    File::open(path).map_err(|e| with_path(e, "cannot open", path))
}

fn create(path: &Path) -> io::Result<File> {
    File::create(path).map_err(|e| with_path(e, "cannot create", path))
}

fn finish(mut file: File) -> io::Result<()> {
    file.flush()?;
    file.sync_all()
}

fn with_path(error: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(error.kind(), format!("{} {}: {}", action, path.display(), error))
}
