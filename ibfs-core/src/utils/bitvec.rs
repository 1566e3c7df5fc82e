//! A compact fixed-size bit vector used to track exhausted rows and columns.

#[cfg(test)]
#[path = "../../tests/unit/utils/bitvec_test.rs"]
mod bitvec_test;

use std::ops::Index;

/// A fixed-size set of bits, all bits are unset initially.
#[derive(Clone, Debug, PartialEq)]
pub struct BitVec {
    blocks: Vec<u8>,
    length: usize,
}

const BITS_IN_BLOCK: usize = std::mem::size_of::<u8>() * 8;

impl BitVec {
    /// Creates a new bit vector of given length with all bits unset.
    pub fn new(length: usize) -> Self {
        let block_count = length.div_ceil(BITS_IN_BLOCK);
        Self { blocks: vec![0; block_count], length }
    }

    /// Sets bit value at given index. Panics if index is out of bounds.
    pub fn set(&mut self, index: usize, bit: bool) {
        assert!(index < self.length);
        let block_index = index / BITS_IN_BLOCK;
        let bit_index = index % BITS_IN_BLOCK;
        let mask = 1 << bit_index;

        if bit {
            self.blocks[block_index] |= mask;
        } else {
            self.blocks[block_index] &= !mask;
        }
    }

    /// Returns bit value at given index or `None` if index is out of bounds.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.length {
            self.blocks.get(index / BITS_IN_BLOCK).map(|block| ((block >> (index % BITS_IN_BLOCK)) & 1) != 0)
        } else {
            None
        }
    }

    /// Returns indices of all unset bits in ascending order.
    pub fn iter_unset(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.length).filter(move |&index| !self[index])
    }
}

impl Index<usize> for BitVec {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        if self.get(index).expect("index out of bounds.") { &true } else { &false }
    }
}
