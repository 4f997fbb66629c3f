//! Error handling for the SHA-256 digest

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// `update` or `finalize` was called on a hasher that already produced its digest
    #[error("Hasher already finalized; call reset() before reuse")]
    AlreadyFinalized,

    /// The message bit length does not fit in the 64-bit length field
    #[error("Message too long: {bytes} bytes exceeds the 2^64 - 1 bit limit")]
    MessageTooLong {
        /// Total message length in bytes at the point of overflow
        bytes: u128,
    },

    /// Computed digest did not match the expected digest
    #[error("Hash verification failed")]
    VerificationFailed,

    /// Text could not be parsed as a 32-byte hex digest
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// A stream of chunks could not be hashed to completion
    #[error("Stream processing error: {0}")]
    StreamProcessing(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading message bytes from a file or reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal failure such as a dropped task channel
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HashError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
