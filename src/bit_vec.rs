use std::fmt;

/// Growable bit sequence packed MSB-first.
///
/// Used for codewords (which can be up to 255 bits long) and for the
/// traversal path buffer, hence `pop_bit`.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Pushes the low `bit_length` bits of `code`, most significant first.
    pub fn push_bits(&mut self, code: u32, bit_length: usize) {
        for bit_pos in (0..bit_length).rev() {
            let bit = (code >> bit_pos) & 1;
            self.push_bit(bit != 0);
        }
    }

    pub fn pop_bit(&mut self) -> Option<bool> {
        if self.bit_count == 0 {
            return None;
        }
        let bit = self.get(self.bit_count - 1);
        self.bit_count -= 1;

        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;
        self.bits[byte_index] &= !(1 << (7 - bit_offset));
        if bit_offset == 0 {
            self.bits.pop();
        }
        Some(bit)
    }

    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.bit_count, "bit index {} out of range", index);
        (self.bits[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.get(i))
    }

    pub fn starts_with(&self, prefix: &BitVec) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    /// Copies the first `n` bits.
    pub fn prefix(&self, n: usize) -> BitVec {
        let mut out = BitVec::new();
        for bit in self.iter().take(n) {
            out.push_bit(bit);
        }
        out
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<&str> for BitVec {
    /// Builds from a string of `0`/`1`; any other character counts as `1`.
    fn from(text: &str) -> Self {
        let mut bits = BitVec::new();
        for c in text.chars() {
            bits.push_bit(c != '0');
        }
        bits
    }
}

#[cfg(test)]
mod test {
    use super::BitVec;

    #[test]
    fn test_push_packs_msb_first() {
        let mut b = BitVec::new();
        b.push_bits(0b101, 3);
        b.push_bits(0b11111, 5);
        b.push_bit(true);
        assert_eq!(b.as_bytes(), &[0b1011_1111, 0b1000_0000]);
        assert_eq!(b.len(), 9);
    }

    #[test]
    fn test_pop_restores_previous_state() {
        let mut b = BitVec::from("10110");
        let before = b.clone();
        b.push_bit(true);
        b.push_bit(false);
        b.push_bit(true);
        assert_eq!(b.pop_bit(), Some(true));
        assert_eq!(b.pop_bit(), Some(false));
        assert_eq!(b.pop_bit(), Some(true));
        assert_eq!(b, before);
    }

    #[test]
    fn test_pop_across_byte_boundary() {
        let mut b = BitVec::from("111111111");
        assert_eq!(b.as_bytes().len(), 2);
        b.pop_bit();
        assert_eq!(b.as_bytes(), &[0xff]);
        assert_eq!(b, BitVec::from("11111111"));
    }

    #[test]
    fn test_prefix_and_display() {
        let b = BitVec::from("0110101");
        assert_eq!(b.prefix(3).to_string(), "011");
        assert!(b.starts_with(&BitVec::from("0110")));
        assert!(!b.starts_with(&BitVec::from("0111")));
        assert!(!BitVec::from("01").starts_with(&b));
    }
}
