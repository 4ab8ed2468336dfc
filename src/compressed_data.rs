use std::io::Cursor;

use crate::error::Result;
use crate::merge_log::{MergeLog, ROWS_LEN};
use crate::metadata::read_header;

/// In-memory form of a compressed file: the merge log and the packed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedData {
    pub rows: MergeLog,
    pub payload: Vec<u8>,
}

impl CompressedData {
    /// Size of the serialized form.
    pub fn serialized_len(&self) -> usize {
        ROWS_LEN + self.payload.len()
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());
        bytes.extend_from_slice(self.rows.as_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    pub fn deserialize(data: &[u8]) -> Result<CompressedData> {
        let mut cursor = Cursor::new(data);
        let rows = read_header(&mut cursor)?;
        let payload = data[cursor.position() as usize..].to_vec();
        Ok(CompressedData { rows, payload })
    }
}
