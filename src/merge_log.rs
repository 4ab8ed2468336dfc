//! The 510-byte merge log ("rows"): the serialized form of a tree.

use crate::error::{HuffmanError, Result};

/// Number of merges needed to join 256 leaves into one tree.
pub const MERGE_COUNT: usize = 255;

/// Size of a serialized merge log in bytes.
pub const ROWS_LEN: usize = MERGE_COUNT * 2;

/// Ordered `(left_slot, right_slot)` pairs, one per merge.
///
/// A `MergeLog` always holds exactly [`ROWS_LEN`] bytes. Whether the pairs
/// describe a valid replay is only known once a tree is rebuilt from it
/// (see [`HuffmanTree::from_rows`](crate::HuffmanTree::from_rows)).
#[derive(Clone, PartialEq, Eq)]
pub struct MergeLog {
    rows: [u8; ROWS_LEN],
}

impl MergeLog {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let rows = <[u8; ROWS_LEN]>::try_from(data).map_err(|_| {
            HuffmanError::malformed(format!(
                "expected {} bytes, got {}",
                ROWS_LEN,
                data.len()
            ))
        })?;
        Ok(MergeLog { rows })
    }

    pub(crate) fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        debug_assert_eq!(pairs.len(), MERGE_COUNT);
        let mut rows = [0u8; ROWS_LEN];
        for (chunk, &(left, right)) in rows.chunks_exact_mut(2).zip(pairs) {
            chunk[0] = left;
            chunk[1] = right;
        }
        MergeLog { rows }
    }

    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.rows.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn as_bytes(&self) -> &[u8; ROWS_LEN] {
        &self.rows
    }
}

impl TryFrom<&[u8]> for MergeLog {
    type Error = HuffmanError;

    fn try_from(data: &[u8]) -> Result<Self> {
        MergeLog::from_bytes(data)
    }
}

impl std::fmt::Debug for MergeLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.pairs()).finish()
    }
}
