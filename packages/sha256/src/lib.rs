//! FIPS 180-4 SHA-256
//!
//! The digest is computed by padding the message into 64-byte blocks, then
//! for each block in order: expanding a 64-word message schedule, running
//! 64 compression rounds over a copy of the hash state, and adding the
//! result back into the state. The final state, as eight big-endian words,
//! is the digest.
//!
//! ```
//! let digest = cryypt_sha256::hash(b"abc")?;
//! assert_eq!(
//!     digest.to_string(),
//!     "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
//! );
//! # Ok::<(), cryypt_sha256::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod async_result;
pub mod cli;
pub mod compression;
pub mod config;
pub mod constants;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod logging;
pub mod padding;
pub mod schedule;
pub mod state;
pub mod streaming;
pub mod word;

// Re-export error types
pub use error::{HashError, Result};

// Re-export the main APIs
pub use api::{Hash, Sha256Builder};
pub use async_result::{AsyncHashResult, AsyncHashResultWithError, AsyncHashResultWithHandler};
pub use config::Sha256Config;
pub use digest::Digest;
pub use hasher::Sha256;
pub use streaming::{collect_hash, stream_sha256, StreamHashChunk, StreamHashResult, StreamingHasher};

/// Compute the SHA-256 digest of `message`
///
/// # Errors
///
/// Returns `HashError::MessageTooLong` if the message length in bits does
/// not fit in 64 bits.
pub fn hash(message: &[u8]) -> Result<Digest> {
    let padded = padding::pad(message)?;
    let mut state = state::HashState::new();
    for block in padded.blocks() {
        state.process_block(block);
    }
    Ok(state.digest())
}

/// Check that `message` hashes to `expected`
///
/// # Errors
///
/// Returns `HashError::VerificationFailed` on mismatch.
pub fn verify(message: &[u8], expected: &Digest) -> Result<()> {
    if hash(message)?.matches(expected) {
        Ok(())
    } else {
        Err(HashError::VerificationFailed)
    }
}

/// Main entry point for the fluent API
pub struct Cryypt;

impl Cryypt {
    /// Master builder for hash operations
    #[must_use]
    pub fn hash() -> HashMasterBuilder {
        HashMasterBuilder
    }
}

/// Master builder for hash operations
pub struct HashMasterBuilder;

impl HashMasterBuilder {
    /// Use SHA-256 hashing
    #[must_use]
    pub fn sha256(self) -> Sha256Builder {
        Sha256Builder::new()
    }
}
