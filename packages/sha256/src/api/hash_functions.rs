//! Internal async hash functions used by the builders

use crate::{Digest, Result, Sha256};

/// Hash `data` in `chunk_size` pieces, yielding to the runtime between
/// pieces so large inputs do not starve other tasks
///
/// # Errors
///
/// Returns `HashError::MessageTooLong` if `data` exceeds the 64-bit bit
/// length limit.
pub async fn sha256_chunked(data: &[u8], chunk_size: usize) -> Result<Digest> {
    let mut hasher = Sha256::new();

    for chunk in data.chunks(chunk_size.max(1)) {
        hasher.update(chunk)?;
        tokio::task::yield_now().await;
    }

    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chunk_size_does_not_change_digest() {
        let data = vec![0x61u8; 10_000];
        let expected = crate::hash(&data).expect("hashes");
        for chunk_size in [0, 1, 63, 64, 65, 8192, 20_000] {
            let digest = sha256_chunked(&data, chunk_size).await.expect("hashes");
            assert_eq!(digest, expected, "chunk_size {chunk_size}");
        }
    }
}
