//! Runtime configuration for async hashing and the `sha256` binary

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Tunables that affect scheduling and presentation, never the digest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sha256Config {
    /// Bytes hashed between async yield points, and the read size when
    /// hashing files
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Render digests in uppercase hex
    #[serde(default = "default_uppercase")]
    pub uppercase: bool,
}

fn default_chunk_size() -> usize {
    8192 // 8 KiB
}

fn default_uppercase() -> bool {
    true
}

impl Default for Sha256Config {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            uppercase: default_uppercase(),
        }
    }
}

impl Sha256Config {
    /// Parse a JSON document; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// Returns `HashError::Config` if the JSON is malformed or fails
    /// validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HashError::config(format!("Invalid configuration JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns `HashError::Config` if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "Failed to read configuration file");
            HashError::config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Check field ranges
    ///
    /// # Errors
    ///
    /// Returns `HashError::Config` when `chunk_size` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(HashError::config("chunk_size must be greater than zero"));
        }
        Ok(())
    }

    /// Render a digest using the configured hex case
    #[must_use]
    pub fn render(&self, digest: &crate::Digest) -> String {
        if self.uppercase {
            digest.to_hex()
        } else {
            digest.to_hex_lower()
        }
    }
}
