//! Incremental SHA-256
//!
//! Buffers at most one partial block between `update` calls and pads on
//! `finalize` using the total byte count seen across all updates.

use crate::constants::BLOCK_LEN;
use crate::digest::Digest;
use crate::padding::{bit_length, final_blocks, Block};
use crate::state::HashState;
use crate::{HashError, Result};

/// Streaming SHA-256 context
///
/// ```
/// use cryypt_sha256::Sha256;
///
/// let mut hasher = Sha256::new();
/// hasher.update(b"a")?;
/// hasher.update(b"bc")?;
/// assert_eq!(
///     hasher.finalize()?.to_hex(),
///     "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
/// );
/// # Ok::<(), cryypt_sha256::HashError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Sha256 {
    state: HashState,
    buffer: Block,
    buffered: usize,
    total_bytes: u64,
    finalized: bool,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Create a hasher seeded with the initial hash value
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: HashState::new(),
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            total_bytes: 0,
            finalized: false,
        }
    }

    /// Feed more message bytes
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlreadyFinalized` after `finalize` until `reset`,
    /// or `HashError::MessageTooLong` if the running length would no longer
    /// fit the 64-bit length field. Neither error changes the hasher.
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<()> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }
        let mut input = data.as_ref();

        let bits = bit_length(u128::from(self.total_bytes) + input.len() as u128)?;
        self.total_bytes = bits / 8;

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(input.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < BLOCK_LEN {
                return Ok(());
            }
            self.state.process_block(&self.buffer);
            self.buffered = 0;
        }

        let chunks = input.chunks_exact(BLOCK_LEN);
        let tail = chunks.remainder();
        for chunk in chunks {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            self.state.process_block(&block);
        }

        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffered = tail.len();
        Ok(())
    }

    /// Pad the buffered tail and produce the digest
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlreadyFinalized` if called twice without `reset`.
    pub fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(HashError::AlreadyFinalized);
        }

        let (blocks, count) = final_blocks(&self.buffer[..self.buffered], self.total_bytes * 8);
        for block in &blocks[..count] {
            self.state.process_block(block);
        }
        self.finalized = true;
        self.buffered = 0;

        let digest = self.state.digest();
        tracing::debug!(total_bytes = self.total_bytes, "SHA-256 finalized");
        Ok(digest)
    }

    /// Consuming form of [`Sha256::finalize`]
    ///
    /// # Errors
    ///
    /// Returns `HashError::AlreadyFinalized` if this hasher was already
    /// finalized.
    pub fn finalize_consume(mut self) -> Result<Digest> {
        self.finalize()
    }

    /// Discard all input and return to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total message bytes accepted so far
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Whether `finalize` has run since construction or the last `reset`
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

impl std::io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf).map_err(std::io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
