use std::fs;

use htree::{files, CodecConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("htree-demo");
    fs::create_dir_all(&dir)?;

    let corpus = dir.join("corpus.txt");
    let sample = dir.join("sample.txt");
    fs::write(
        &corpus,
        "Hello, world! This is a sample text for Huffman compression. \
         The quick brown fox jumps over the lazy dog.",
    )?;
    fs::write(&sample, "A lazy dog, a quick fox, and hello again.")?;

    let config = CodecConfig::default();

    // Compress with the file's own tree
    let packed = dir.join("corpus.huf");
    let report = files::encode(&corpus, &packed, &config)?;
    println!("corpus: {} bytes in / {} bytes out", report.bytes_in, report.bytes_out);

    // Save the corpus tree and reuse it for a different file
    let tree = dir.join("corpus.htree");
    files::make_tree(&corpus, &tree, &config)?;
    let sample_packed = dir.join("sample.huf");
    let report = files::encode_with_tree(&sample, &tree, &sample_packed, &config)?;
    println!("sample: {} bytes in / {} bytes out", report.bytes_in, report.bytes_out);

    let restored = dir.join("sample.out");
    files::decode(&sample_packed, &restored, &config)?;
    if fs::read(&restored)? != fs::read(&sample)? {
        return Err("decompressed data does not match".into());
    }
    println!("round trip ok");

    fs::remove_dir_all(&dir)?;
    Ok(())
}
