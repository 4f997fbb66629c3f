//! Message schedule expansion

use crate::constants::ROUNDS;
use crate::padding::Block;
use crate::word::{add, small_sigma0, small_sigma1};

/// The 64 words fed into the compression rounds for one block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageSchedule {
    words: [u32; ROUNDS],
}

impl MessageSchedule {
    /// Expand a block: 16 big-endian words, then 48 mixed words
    #[must_use]
    pub fn from_block(block: &Block) -> Self {
        let mut w = [0u32; ROUNDS];

        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        for j in 16..ROUNDS {
            w[j] = add(
                add(w[j - 16], small_sigma0(w[j - 15])),
                add(w[j - 7], small_sigma1(w[j - 2])),
            );
        }

        Self { words: w }
    }

    /// Word for round `j`
    #[inline]
    #[must_use]
    pub fn word(&self, j: usize) -> u32 {
        self.words[j]
    }

    /// All 64 words in round order
    #[must_use]
    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.words
    }
}
