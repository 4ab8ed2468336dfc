use std::io::{self, Read};
use std::ops::Index;

/// Occurrence count of every byte value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable { counts: [0; 256] }
    }

    pub fn add(&mut self, data: &[u8]) {
        for &byte in data {
            self.counts[byte as usize] += 1;
        }
    }

    /// Reads `reader` to the end in `buffer_size` chunks.
    pub fn from_reader<R: Read>(reader: &mut R, buffer_size: usize) -> io::Result<Self> {
        let mut table = FrequencyTable::new();
        let mut buffer = vec![0u8; buffer_size.max(1)];
        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            table.add(&buffer[..n]);
        }
        Ok(table)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(data: &[u8]) -> Self {
        let mut table = FrequencyTable::new();
        table.add(data);
        table
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u64;

    fn index(&self, byte: u8) -> &u64 {
        &self.counts[byte as usize]
    }
}
