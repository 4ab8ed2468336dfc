//! Streaming bit packing and unpacking of the payload.
//!
//! Bits are packed MSB-first: the first bit of a codeword lands in bit 7 of
//! the output byte. Both directions batch their output in a buffer of the
//! configured size and write it out whenever it fills.

use std::io::{self, Read, Write};

use log::debug;

use crate::bit_vec::BitVec;
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::hufftree::HuffNode;
use crate::padding::select_padding;

pub struct BitStreamEncoder<'a, W: Write> {
    table: &'a CodeTable,
    writer: W,
    buffer: Vec<u8>,
    capacity: usize,
    accumulator: u8,
    pending: usize,
    written: u64,
}

impl<'a, W: Write> BitStreamEncoder<'a, W> {
    pub fn new(table: &'a CodeTable, writer: W, buffer_size: usize) -> Self {
        let capacity = buffer_size.max(1);
        BitStreamEncoder {
            table,
            writer,
            buffer: Vec::with_capacity(capacity),
            capacity,
            accumulator: 0,
            pending: 0,
            written: 0,
        }
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> io::Result<()> {
        let table = self.table;
        for &byte in data {
            self.push_code(table.get(byte))?;
        }
        Ok(())
    }

    fn push_code(&mut self, code: &BitVec) -> io::Result<()> {
        for bit in code.iter() {
            self.accumulator = (self.accumulator << 1) | bit as u8;
            self.pending += 1;
            if self.pending == 8 {
                self.buffer.push(self.accumulator);
                self.accumulator = 0;
                self.pending = 0;
                if self.buffer.len() >= self.capacity {
                    self.flush_buffer()?;
                }
            }
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.written += self.buffer.len() as u64;
            self.buffer.clear();
        }
        Ok(())
    }

    /// Pads the final partial byte, writes everything out and returns the
    /// writer with the number of payload bytes written.
    pub fn finish(mut self) -> Result<(W, u64)> {
        if self.pending > 0 {
            let pad = select_padding(self.table, 8 - self.pending)?;
            debug!("padding final byte with {}", pad);
            self.push_code(&pad)?;
            debug_assert_eq!(self.pending, 0);
        }
        self.flush_buffer()?;
        self.writer.flush()?;
        Ok((self.writer, self.written))
    }
}

pub struct BitStreamDecoder<'a, W: Write> {
    root: &'a HuffNode,
    current: &'a HuffNode,
    writer: W,
    buffer: Vec<u8>,
    capacity: usize,
    written: u64,
}

impl<'a, W: Write> BitStreamDecoder<'a, W> {
    pub fn new(root: &'a HuffNode, writer: W, buffer_size: usize) -> Self {
        let capacity = buffer_size.max(1);
        BitStreamDecoder {
            root,
            current: root,
            writer,
            buffer: Vec::with_capacity(capacity),
            capacity,
            written: 0,
        }
    }

    pub fn write_packed(&mut self, data: &[u8]) -> Result<()> {
        for &byte in data {
            for shift in (0..8).rev() {
                let bit = (byte >> shift) & 1 == 1;
                let next = self
                    .current
                    .child(bit)
                    .ok_or_else(|| HuffmanError::malformed("tree root is a leaf"))?;
                match next {
                    HuffNode::Leaf { symbol, .. } => {
                        self.buffer.push(*symbol);
                        self.current = self.root;
                        if self.buffer.len() >= self.capacity {
                            self.flush_buffer()?;
                        }
                    }
                    HuffNode::Internal { .. } => self.current = next,
                }
            }
        }
        Ok(())
    }

    fn flush_buffer(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.written += self.buffer.len() as u64;
            self.buffer.clear();
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(W, u64)> {
        if !std::ptr::eq(self.current, self.root) {
            debug!("payload ends inside a codeword (padding)");
        }
        self.flush_buffer()?;
        self.writer.flush()?;
        Ok((self.writer, self.written))
    }
}

/// Encodes all of `reader` into `writer`, returning the payload size.
pub fn encode_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: W,
    table: &CodeTable,
    buffer_size: usize,
) -> Result<u64> {
    let mut encoder = BitStreamEncoder::new(table, writer, buffer_size);
    let mut chunk = vec![0u8; buffer_size.max(1)];
    loop {
        let n = read_chunk(reader, &mut chunk)?;
        if n == 0 {
            break;
        }
        encoder.write_bytes(&chunk[..n])?;
    }
    let (_, written) = encoder.finish()?;
    Ok(written)
}

/// Decodes all of `reader` into `writer`, returning the decoded size.
pub fn decode_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: W,
    root: &HuffNode,
    buffer_size: usize,
) -> Result<u64> {
    let mut decoder = BitStreamDecoder::new(root, writer, buffer_size);
    let mut chunk = vec![0u8; buffer_size.max(1)];
    loop {
        let n = read_chunk(reader, &mut chunk)?;
        if n == 0 {
            break;
        }
        decoder.write_packed(&chunk[..n])?;
    }
    let (_, written) = decoder.finish()?;
    Ok(written)
}

fn read_chunk<R: Read>(reader: &mut R, chunk: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(chunk) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
