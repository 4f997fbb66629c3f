//! Running hash state carried across blocks

use crate::compression::{compress, WorkingState};
use crate::constants::{DIGEST_LEN, IV};
use crate::digest::Digest;
use crate::padding::Block;
use crate::schedule::MessageSchedule;
use crate::word::add;

/// The eight chaining words `h0..h7`
///
/// Every computation owns its own state, seeded from the IV. The state only
/// changes through [`HashState::accumulate`], once per block, in block order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState {
    h: [u32; 8],
}

impl Default for HashState {
    fn default() -> Self {
        Self::new()
    }
}

impl HashState {
    /// Fresh state holding the FIPS 180-4 initial hash value
    #[must_use]
    pub const fn new() -> Self {
        Self { h: IV }
    }

    /// Current words `h0..h7`
    #[must_use]
    pub const fn words(&self) -> [u32; 8] {
        self.h
    }

    /// Fold a block's final working registers into the state
    pub fn accumulate(&mut self, working: &WorkingState) {
        for (h, r) in self.h.iter_mut().zip(working.registers()) {
            *h = add(*h, r);
        }
    }

    /// Schedule, compress and accumulate one block
    pub fn process_block(&mut self, block: &Block) {
        let schedule = MessageSchedule::from_block(block);
        let working = compress(&schedule, self);
        self.accumulate(&working);
    }

    /// Serialize `h0..h7` as big-endian words
    #[must_use]
    pub fn digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.h) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
        Digest::from(out)
    }
}
