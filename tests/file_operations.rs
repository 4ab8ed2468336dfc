use std::fs;
use std::path::PathBuf;

use htree::{files, CodecConfig, HuffmanError, ROWS_LEN};
use tempfile::{tempdir, TempDir};

fn config() -> CodecConfig {
    CodecConfig {
        buffer_size: 1024,
        ..CodecConfig::default()
    }
}

fn write(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn encode_then_decode_file() {
    let dir = tempdir().unwrap();
    let data: Vec<u8> = (0..20_000u32).map(|i| (i * i % 251) as u8).collect();
    let input = write(&dir, "input.bin", &data);
    let packed = dir.path().join("input.huf");
    let restored = dir.path().join("restored.bin");

    let report = files::encode(&input, &packed, &config()).unwrap();
    assert_eq!(report.bytes_in, data.len() as u64);
    assert_eq!(report.bytes_out, fs::metadata(&packed).unwrap().len());

    let report = files::decode(&packed, &restored, &config()).unwrap();
    assert_eq!(report.bytes_out, data.len() as u64);
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn tree_file_reused_for_other_files() {
    let dir = tempdir().unwrap();
    let corpus = write(&dir, "corpus.txt", b"the quick brown fox jumps over the lazy dog");
    let tree = dir.path().join("corpus.htree");
    files::make_tree(&corpus, &tree, &config()).unwrap();
    assert_eq!(fs::metadata(&tree).unwrap().len(), ROWS_LEN as u64);

    let samples: [&[u8]; 2] = [b"a lazy fox", b"\x01\x02\x03 binary that the corpus never had"];
    for (i, sample) in samples.iter().enumerate() {
        let input = write(&dir, &format!("sample{}.bin", i), sample);
        let packed = dir.path().join(format!("sample{}.huf", i));
        let restored = dir.path().join(format!("sample{}.out", i));

        let report = files::encode_with_tree(&input, &tree, &packed, &config()).unwrap();
        assert_eq!(report.bytes_in, ROWS_LEN as u64 + sample.len() as u64);

        let packed_bytes = fs::read(&packed).unwrap();
        assert_eq!(&packed_bytes[..ROWS_LEN], &fs::read(&tree).unwrap()[..]);

        files::decode(&packed, &restored, &config()).unwrap();
        assert_eq!(&fs::read(&restored).unwrap()[..], *sample);
    }
}

#[test]
fn same_input_and_output_is_refused() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "same.txt", b"do not overwrite me");
    let alias = dir.path().join(".").join("same.txt");

    let err = files::encode(&input, &alias, &config()).unwrap_err();
    assert!(matches!(err, HuffmanError::PathCollision { .. }));
    assert_eq!(fs::read(&input).unwrap(), b"do not overwrite me");
}

#[test]
fn missing_input_is_io_unavailable() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let out = dir.path().join("out.huf");

    let err = files::encode(&missing, &out, &config()).unwrap_err();
    assert!(matches!(err, HuffmanError::IoUnavailable(_)));
    assert!(err.to_string().contains("missing.txt"));
    assert!(!out.exists());
}

#[test]
fn truncated_tree_file_is_rejected() {
    let dir = tempdir().unwrap();
    let input = write(&dir, "input.txt", b"payload");
    let tree = write(&dir, "bad.htree", &[0u8; ROWS_LEN - 1]);
    let out = dir.path().join("out.huf");

    let err = files::encode_with_tree(&input, &tree, &out, &config()).unwrap_err();
    assert!(matches!(err, HuffmanError::MalformedTreeLog(_)));
}

#[test]
fn corrupt_header_is_rejected() {
    let dir = tempdir().unwrap();
    // pair (0, 0) merges a slot with itself
    let packed = write(&dir, "bad.huf", &[0u8; ROWS_LEN + 4]);
    let out = dir.path().join("out.bin");

    let err = files::decode(&packed, &out, &config()).unwrap_err();
    assert!(matches!(err, HuffmanError::MalformedTreeLog(_)));
}

#[test]
fn config_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = write(&dir, "htree.toml", b"buffer_size = 3\ntree_extension = \"tree\"\n");
    let config = CodecConfig::load(&path).unwrap();
    assert_eq!(config.buffer_size, 3);
    assert_eq!(config.tree_extension, "tree");

    let input = write(&dir, "tiny.txt", b"tiny buffers still round trip");
    let packed = dir.path().join("tiny.huf");
    let restored = dir.path().join("tiny.out");
    files::encode(&input, &packed, &config).unwrap();
    files::decode(&packed, &restored, &config).unwrap();
    assert_eq!(fs::read(&restored).unwrap(), b"tiny buffers still round trip");
}
