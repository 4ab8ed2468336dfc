use std::ops::Index;

use crate::bit_vec::BitVec;
use crate::hufftree::{HuffNode, HuffmanTree};

/// Codeword of every byte value, indexed by the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<BitVec>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![BitVec::new(); 256];
        let mut path = BitVec::new();
        collect(tree.root(), &mut path, &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, byte: u8) -> &BitVec {
        &self.codes[byte as usize]
    }

    /// The first codeword of maximal length, in byte order.
    pub fn longest(&self) -> &BitVec {
        let mut longest = &self.codes[0];
        for code in &self.codes[1..] {
            if code.len() > longest.len() {
                longest = code;
            }
        }
        longest
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .map(|(byte, code)| (byte as u8, code))
    }
}

impl Index<u8> for CodeTable {
    type Output = BitVec;

    fn index(&self, byte: u8) -> &BitVec {
        self.get(byte)
    }
}

// Recursion depth is bounded by the tree height, at most 255.
fn collect(node: &HuffNode, path: &mut BitVec, codes: &mut [BitVec]) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes[*symbol as usize] = path.clone();
        }
        HuffNode::Internal { left, right, .. } => {
            path.push_bit(false);
            collect(left, path, codes);
            path.pop_bit();

            path.push_bit(true);
            collect(right, path, codes);
            path.pop_bit();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::frequency::FrequencyTable;

    fn tables() -> Vec<CodeTable> {
        let all_values: Vec<u8> = (0..=255u8).collect();
        let inputs: Vec<Vec<u8>> = vec![
            Vec::new(),
            b"AAAA".to_vec(),
            b"a man a plan a canal panama".to_vec(),
            all_values,
        ];
        inputs
            .iter()
            .map(|data| HuffmanTree::from_bytes(data).unwrap().generate_table())
            .collect()
    }

    #[test]
    fn test_every_value_has_a_codeword() {
        for table in tables() {
            assert!(table.iter().all(|(_, code)| !code.is_empty()));
        }
    }

    #[test]
    fn test_codewords_are_prefix_free() {
        for table in tables() {
            for (a, code_a) in table.iter() {
                for (b, code_b) in table.iter() {
                    if a != b {
                        assert!(!code_b.starts_with(code_a), "{} is a prefix of {}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_uniform_counts_give_eight_bit_codes() {
        let mut freq = FrequencyTable::new();
        freq.add(&(0..=255u8).collect::<Vec<_>>());
        let table = HuffmanTree::from_frequencies(&freq).unwrap().generate_table();
        assert!(table.iter().all(|(_, code)| code.len() == 8));
        assert_eq!(table.longest(), &table[0]);
    }

    #[test]
    fn test_frequent_value_gets_short_code() {
        let table = HuffmanTree::from_bytes(b"AAAA").unwrap().generate_table();
        assert_eq!(table[b'A'].to_string(), "1");
        assert_eq!(table.longest().len(), 255);
        assert_eq!(table.longest(), &table[0]);
    }
}
