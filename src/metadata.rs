use std::io::{self, Read, Write};

use crate::error::{HuffmanError, Result};
use crate::merge_log::{MergeLog, ROWS_LEN};

/// Reads the merge log at the head of a compressed stream, leaving the
/// reader positioned at the first payload byte.
pub fn read_header<R: Read>(reader: &mut R) -> Result<MergeLog> {
    let mut rows = [0u8; ROWS_LEN];
    reader.read_exact(&mut rows).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => HuffmanError::malformed(format!(
            "compressed data is shorter than its {}-byte header",
            ROWS_LEN
        )),
        _ => HuffmanError::IoUnavailable(e),
    })?;
    MergeLog::from_bytes(&rows)
}

pub fn write_header<W: Write>(writer: &mut W, rows: &MergeLog) -> io::Result<()> {
    writer.write_all(rows.as_bytes())
}

/// Reads a standalone tree file, which must be exactly one merge log.
pub fn read_tree_file<R: Read>(reader: &mut R) -> Result<MergeLog> {
    let mut data = Vec::with_capacity(ROWS_LEN + 1);
    // one byte past the log is enough to tell that the file is too long
    reader.take(ROWS_LEN as u64 + 1).read_to_end(&mut data)?;
    MergeLog::from_bytes(&data)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;
    use crate::hufftree::HuffmanTree;

    #[test]
    fn test_header_leaves_payload_in_reader() {
        let tree = HuffmanTree::from_bytes(b"header").unwrap();
        let mut file = Vec::new();
        write_header(&mut file, tree.rows()).unwrap();
        file.extend_from_slice(&[0xab, 0xcd]);

        let mut reader = Cursor::new(file);
        assert_eq!(&read_header(&mut reader).unwrap(), tree.rows());
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![0xab, 0xcd]);
    }

    #[test]
    fn test_short_header_is_malformed() {
        let err = read_header(&mut Cursor::new(vec![0u8; 100])).unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedTreeLog(_)));
    }

    #[test]
    fn test_tree_file_size_is_validated() {
        let rows = HuffmanTree::from_bytes(b"tree").unwrap().rows().clone();
        let exact = rows.as_bytes().to_vec();
        assert_eq!(read_tree_file(&mut Cursor::new(exact.clone())).unwrap(), rows);

        let short = exact[..ROWS_LEN - 1].to_vec();
        assert!(matches!(
            read_tree_file(&mut Cursor::new(short)),
            Err(HuffmanError::MalformedTreeLog(_))
        ));

        let mut long = exact;
        long.push(0);
        assert!(matches!(
            read_tree_file(&mut Cursor::new(long)),
            Err(HuffmanError::MalformedTreeLog(_))
        ));
    }
}
