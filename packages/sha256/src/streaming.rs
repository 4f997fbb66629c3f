//! Streaming hash computation over async byte streams
//!
//! Each input chunk is folded into a [`Sha256`] as it arrives; nothing is
//! collected up front.

use crate::{Digest, HashError, Result, Sha256};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Stream adapter that hashes chunks incrementally
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        hasher: Sha256,
        finished: bool,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Wrap a stream of byte chunks
    pub fn new(input: S) -> Self {
        Self {
            input,
            hasher: Sha256::new(),
            finished: false,
        }
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.hasher.total_bytes()
    }
}

/// Result of streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final digest
    pub digest: Digest,
    /// Total bytes processed
    pub total_bytes: u64,
}

/// Progress item yielded by [`StreamingHasher`]
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes processed in this chunk
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Whether this is the final item carrying the digest
    pub is_final: bool,
    /// Final digest (only present if `is_final` = true)
    pub digest: Option<Digest>,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.input.as_mut().poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                if let Err(e) = this.hasher.update(&chunk) {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e)));
                }
                tracing::trace!(bytes = chunk.len(), "SHA-256 stream chunk");

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk.len() as u64,
                    total_bytes: this.hasher.total_bytes(),
                    is_final: false,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                *this.finished = true;
                let digest = match this.hasher.finalize() {
                    Ok(digest) => digest,
                    Err(e) => return Poll::Ready(Some(Err(e))),
                };

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: this.hasher.total_bytes(),
                    is_final: true,
                    digest: Some(digest),
                })))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a streaming SHA-256 hasher from any stream of byte chunks
pub fn stream_sha256<S>(input: S) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input)
}

/// Collect the final digest from a streaming hasher
///
/// # Errors
///
/// Returns `HashError` if a chunk fails to hash or the stream ends without
/// producing a digest.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    while let Some(chunk_result) = hasher.next().await {
        let chunk = chunk_result?;

        if chunk.is_final {
            let digest = chunk.digest.ok_or_else(|| {
                HashError::StreamProcessing("Final chunk carried no digest".to_string())
            })?;
            return Ok(StreamHashResult {
                digest,
                total_bytes: chunk.total_bytes,
            });
        }
    }

    Err(HashError::StreamProcessing(
        "Stream ended without producing final hash".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use tokio_stream::StreamExt;

    #[tokio::test]
    async fn test_streaming_sha256() -> Result<()> {
        let data_chunks = vec![
            b"Hello ".to_vec(),
            b"streaming ".to_vec(),
            b"world!".to_vec(),
        ];
        let input_stream = stream::iter(data_chunks.clone());

        let stream_result = collect_hash(stream_sha256(input_stream)).await?;

        let combined_data: Vec<u8> = data_chunks.into_iter().flatten().collect();
        assert_eq!(
            stream_result.digest,
            crate::hash(&combined_data)?,
            "Streaming and batch results should match"
        );
        assert_eq!(stream_result.total_bytes, combined_data.len() as u64);
        Ok(())
    }

    #[tokio::test]
    async fn test_streaming_chunk_processing() -> Result<()> {
        let data_chunks = vec![b"chunk1".to_vec(), b"chunk2".to_vec(), b"chunk3".to_vec()];
        let mut stream_hasher = stream_sha256(stream::iter(data_chunks));
        let mut chunk_count = 0;
        let mut bytes_seen = 0;

        while let Some(chunk_result) = stream_hasher.next().await {
            let chunk = chunk_result?;

            if chunk.is_final {
                assert!(chunk.digest.is_some(), "Final chunk should have digest");
                break;
            }
            chunk_count += 1;
            bytes_seen += chunk.bytes_processed;
            assert!(chunk.digest.is_none(), "Non-final chunks should not have digest");
        }

        assert_eq!(chunk_count, 3, "Should process 3 data chunks");
        assert_eq!(bytes_seen, 18, "Should process 18 bytes total"); // 6 + 6 + 6
        assert_eq!(stream_hasher.total_bytes(), 18);
        assert!(stream_hasher.next().await.is_none(), "Stream is fused after final");
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_stream_is_empty_message() -> Result<()> {
        let result = collect_hash(stream_sha256(stream::iter(Vec::<Vec<u8>>::new()))).await?;
        assert_eq!(result.digest, crate::hash(b"")?);
        assert_eq!(result.total_bytes, 0);
        Ok(())
    }
}
