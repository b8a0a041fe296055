#[cfg(test)]
#[path = "../../tests/unit/population/bit_vector_test.rs"]
mod bit_vector_test;

use crate::utils::Random;
use std::fmt;

const BLOCK_BITS: usize = 64;

/// A fixed length bit vector packed into 64 bit blocks. Unused bits of the last block
/// are kept at zero, so equality compares blocks directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitVector {
    blocks: Vec<u64>,
    len: usize,
}

impl BitVector {
    /// Creates a zeroed bit vector of the given length.
    pub fn new(len: usize) -> Self {
        Self { blocks: vec![0; len.div_ceil(BLOCK_BITS)], len }
    }

    /// Creates a bit vector of the given length with every bit drawn from a fair coin.
    pub fn random(len: usize, random: &dyn Random) -> Self {
        let mut bits = Self::new(len);

        for index in 0..len {
            if random.is_head_not_tails() {
                bits.set(index, true);
            }
        }

        bits
    }

    /// Returns the amount of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the vector has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at the given index.
    pub fn get(&self, index: usize) -> bool {
        self.check_index(index);
        self.blocks[index / BLOCK_BITS] & (1 << (index % BLOCK_BITS)) != 0
    }

    /// Sets the bit at the given index to the given value.
    pub fn set(&mut self, index: usize, value: bool) {
        self.check_index(index);

        let mask = 1 << (index % BLOCK_BITS);
        if value {
            self.blocks[index / BLOCK_BITS] |= mask;
        } else {
            self.blocks[index / BLOCK_BITS] &= !mask;
        }
    }

    /// Flips the bit at the given index.
    pub fn flip(&mut self, index: usize) {
        self.check_index(index);
        self.blocks[index / BLOCK_BITS] ^= 1 << (index % BLOCK_BITS);
    }

    /// Flips all bits in the `[start, end)` range.
    pub fn flip_range(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end <= self.len,
            "flip range [{start}, {end}) is out of bounds of length {}",
            self.len
        );

        for index in start..end {
            self.blocks[index / BLOCK_BITS] ^= 1 << (index % BLOCK_BITS);
        }
    }

    /// Counts set bits.
    pub fn count_ones(&self) -> usize {
        self.blocks.iter().map(|block| block.count_ones() as usize).sum()
    }

    fn check_index(&self, index: usize) {
        assert!(index < self.len, "bit index {index} is out of bounds of length {}", self.len);
    }
}

impl fmt::Binary for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (0..self.len).try_for_each(|index| write!(f, "{}", if self.get(index) { '1' } else { '0' }))
    }
}
