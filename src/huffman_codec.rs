use std::io::{self, Read, Seek, SeekFrom, Write};

use log::debug;

use crate::bit_stream::{decode_stream, encode_stream};
use crate::code_table::CodeTable;
use crate::compressed_data::CompressedData;
use crate::config::CodecConfig;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;
use crate::merge_log::{MergeLog, ROWS_LEN};
use crate::metadata::{read_header, read_tree_file, write_header};

/// A tree with its codeword table, ready to encode or decode payloads.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    tree: HuffmanTree,
    encode_table: CodeTable,
    config: CodecConfig,
}

/// Byte counts of a completed file operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationReport {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl HuffmanCodec {
    pub fn new(tree: HuffmanTree) -> Self {
        Self::with_config(tree, CodecConfig::default())
    }

    pub fn with_config(tree: HuffmanTree, config: CodecConfig) -> Self {
        let encode_table = tree.generate_table();
        HuffmanCodec {
            tree,
            encode_table,
            config,
        }
    }

    /// Counts the frequencies of everything `reader` yields and builds a
    /// codec for them. The reader is left at its end.
    pub fn from_reader<R: Read>(reader: &mut R, config: CodecConfig) -> Result<Self> {
        let frequencies = FrequencyTable::from_reader(reader, config.buffer_size)?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        Ok(Self::with_config(tree, config))
    }

    pub fn from_rows(rows: &MergeLog, config: CodecConfig) -> Result<Self> {
        let tree = HuffmanTree::from_rows(rows)?;
        Ok(Self::with_config(tree, config))
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.encode_table
    }

    pub fn encode(&self, data: &[u8]) -> Result<CompressedData> {
        let mut payload = Vec::new();
        self.encode_to(&mut io::Cursor::new(data), &mut payload)?;
        Ok(CompressedData {
            rows: self.tree.rows().clone(),
            payload,
        })
    }

    /// Rebuilds the tree stored in `compressed` and decodes its payload.
    pub fn decode(compressed: &CompressedData) -> Result<Vec<u8>> {
        let codec = HuffmanCodec::from_rows(&compressed.rows, CodecConfig::default())?;
        let mut result = Vec::new();
        codec.decode_from(&mut io::Cursor::new(&compressed.payload), &mut result)?;
        Ok(result)
    }

    /// Writes the packed payload of `reader` (no header).
    pub fn encode_to<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<u64> {
        encode_stream(reader, writer, &self.encode_table, self.config.buffer_size)
    }

    /// Decodes a packed payload (header already consumed).
    pub fn decode_from<R: Read, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<u64> {
        decode_stream(reader, writer, self.tree.root(), self.config.buffer_size)
    }

    /// Two passes over `input`: frequency count, then rewind and encode.
    /// Writes `[merge log][payload]`.
    pub fn encode_file<R: Read + Seek, W: Write>(
        input: &mut R,
        output: &mut W,
        config: &CodecConfig,
    ) -> Result<OperationReport> {
        let codec = HuffmanCodec::from_reader(input, config.clone())?;
        input.seek(SeekFrom::Start(0))?;

        write_header(output, codec.tree.rows())?;
        let mut counted = CountingReader::new(input);
        let payload = codec.encode_to(&mut counted, output)?;
        debug!("encoded {} bytes into {} payload bytes", counted.count, payload);

        Ok(OperationReport {
            bytes_in: counted.count,
            bytes_out: ROWS_LEN as u64 + payload,
        })
    }

    pub fn decode_file<R: Read, W: Write>(
        input: &mut R,
        output: &mut W,
        config: &CodecConfig,
    ) -> Result<OperationReport> {
        let rows = read_header(input)?;
        let codec = HuffmanCodec::from_rows(&rows, config.clone())?;

        let mut counted = CountingReader::new(input);
        let decoded = codec.decode_from(&mut counted, output)?;
        debug!("decoded {} payload bytes into {} bytes", counted.count, decoded);

        Ok(OperationReport {
            bytes_in: ROWS_LEN as u64 + counted.count,
            bytes_out: decoded,
        })
    }

    /// Writes only the merge log built from `input`'s frequencies.
    pub fn make_tree<R: Read, W: Write>(
        input: &mut R,
        output: &mut W,
        config: &CodecConfig,
    ) -> Result<OperationReport> {
        let mut counted = CountingReader::new(input);
        let codec = HuffmanCodec::from_reader(&mut counted, config.clone())?;
        write_header(output, codec.tree.rows())?;
        output.flush()?;

        Ok(OperationReport {
            bytes_in: counted.count,
            bytes_out: ROWS_LEN as u64,
        })
    }

    /// Encodes `input` with the tree in `tree_file`, ignoring `input`'s own
    /// frequencies. The tree file's merge log is copied as the header.
    pub fn encode_with_tree<R: Read, T: Read, W: Write>(
        input: &mut R,
        tree_file: &mut T,
        output: &mut W,
        config: &CodecConfig,
    ) -> Result<OperationReport> {
        let rows = read_tree_file(tree_file)?;
        let codec = HuffmanCodec::from_rows(&rows, config.clone())?;

        write_header(output, &rows)?;
        let mut counted = CountingReader::new(input);
        let payload = codec.encode_to(&mut counted, output)?;
        debug!("encoded {} bytes with supplied tree into {} payload bytes", counted.count, payload);

        Ok(OperationReport {
            bytes_in: ROWS_LEN as u64 + counted.count,
            bytes_out: ROWS_LEN as u64 + payload,
        })
    }
}

struct CountingReader<'a, R> {
    inner: &'a mut R,
    count: u64,
}

impl<'a, R: Read> CountingReader<'a, R> {
    fn new(inner: &'a mut R) -> Self {
        CountingReader { inner, count: 0 }
    }
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}
