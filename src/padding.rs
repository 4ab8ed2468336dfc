//! Choosing the filler bits that complete the last payload byte.
//!
//! The decoder is back at the root after the last real codeword, so the
//! padding is walked from the root as well. A pattern is safe when that walk
//! never reaches a leaf: no codeword may be a prefix of the pattern.

use log::warn;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};

pub const MAX_PADDING: usize = 7;

/// Returns `bits` padding bits that cannot decode to a symbol under `table`.
pub fn select_padding(table: &CodeTable, bits: usize) -> Result<BitVec> {
    if bits == 0 || bits > MAX_PADDING {
        return Err(HuffmanError::InvalidPadding(bits));
    }

    // Any proper prefix of a leaf path only visits internal nodes.
    let longest = table.longest();
    if bits + 1 < longest.len() {
        return Ok(longest.prefix(bits));
    }

    for value in 0..(1u32 << bits) {
        let mut pattern = BitVec::new();
        pattern.push_bits(value, bits);
        if is_safe(table, &pattern) {
            return Ok(pattern);
        }
    }

    warn!("no safe {}-bit padding found, falling back to zeros", bits);
    let mut zeros = BitVec::new();
    zeros.push_bits(0, bits);
    Ok(zeros)
}

/// True when no codeword is a prefix of, or equal to, `pattern`.
pub fn is_safe(table: &CodeTable, pattern: &BitVec) -> bool {
    table
        .iter()
        .all(|(_, code)| code.len() > pattern.len() || !pattern.starts_with(code))
}
