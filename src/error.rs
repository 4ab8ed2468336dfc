use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::min_heap::HeapErr;

pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Source or destination could not be opened, read or written.
    #[error("I/O unavailable: {0}")]
    IoUnavailable(#[from] io::Error),

    /// A merge log had the wrong length or referenced an empty slot.
    #[error("malformed tree log: {0}")]
    MalformedTreeLog(String),

    #[error("paths must differ: {} and {}", .first.display(), .second.display())]
    PathCollision { first: PathBuf, second: PathBuf },

    #[error("padding length must be between 1 and 7 bits, got {0}")]
    InvalidPadding(usize),

    #[error("heap error: {0}")]
    Heap(#[from] HeapErr),

    #[error("config error: {0}")]
    Config(String),
}

impl HuffmanError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        HuffmanError::MalformedTreeLog(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        HuffmanError::Config(msg.into())
    }
}
