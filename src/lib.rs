//! # htree
//!
//! Byte-oriented Huffman compression over a fixed forest of 256 leaves.
//!
//! Every tree is described by a 510-byte merge log, which is written as the
//! header of each compressed file and can also be saved on its own as a tree
//! file and reused to compress other files.
//!
//! ## Quick Start
//!
//! ```rust
//! use htree::{CompressedData, HuffmanCodec, HuffmanTree};
//!
//! let text = b"compress me, compress me again";
//! let codec = HuffmanCodec::new(HuffmanTree::from_bytes(text)?);
//!
//! let bytes = codec.encode(text)?.serialize();
//! let restored = HuffmanCodec::decode(&CompressedData::deserialize(&bytes)?)?;
//! assert_eq!(restored, text);
//! # Ok::<(), htree::HuffmanError>(())
//! ```

pub mod bit_stream;
pub mod code_table;
pub mod compressed_data;
pub mod config;
pub mod error;
pub mod files;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod merge_log;
pub mod metadata;
pub mod padding;
pub mod paths;

// Internal modules - not part of public API
mod bit_vec;
mod min_heap;

pub use bit_vec::BitVec;
pub use code_table::CodeTable;
pub use compressed_data::CompressedData;
pub use config::CodecConfig;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::{HuffmanCodec, OperationReport};
pub use hufftree::{HuffNode, HuffmanTree};
pub use merge_log::{MergeLog, ROWS_LEN};
pub use min_heap::HeapErr;
