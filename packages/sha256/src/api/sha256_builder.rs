//! SHA-256 fluent builder
//!
//! Usage: `Hash::sha256().on_result(handler).compute(data).await`

use super::hash_functions::sha256_chunked;
use crate::{AsyncHashResult, AsyncHashResultWithError, Digest, HashError, Result, Sha256Config};
use tokio::sync::oneshot;

/// SHA-256 hash builder
#[derive(Clone, Debug, Default)]
pub struct Sha256Builder {
    config: Sha256Config,
}

/// SHA-256 hash builder with result handler
pub struct Sha256BuilderWithHandler<F, T> {
    config: Sha256Config,
    result_handler: F,
    _phantom: std::marker::PhantomData<T>,
}

/// SHA-256 hash builder with error handler
pub struct Sha256BuilderWithError<E> {
    config: Sha256Config,
    error_handler: E,
}

impl Sha256Builder {
    /// Create new SHA-256 builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the builder configuration
    #[must_use]
    pub fn with_config(self, config: Sha256Config) -> Self {
        Self { config }
    }

    /// Set how many bytes are hashed between yield points
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &Sha256Config {
        &self.config
    }

    /// Add `on_result` handler
    pub fn on_result<F, T>(self, handler: F) -> Sha256BuilderWithHandler<F, T>
    where
        F: FnOnce(Result<Digest>) -> T + Send + 'static,
        T: Send + 'static,
    {
        Sha256BuilderWithHandler {
            config: self.config,
            result_handler: handler,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Add `on_error` handler - transforms errors but passes through success
    pub fn on_error<E>(self, handler: E) -> Sha256BuilderWithError<E>
    where
        E: Fn(HashError) -> HashError + Send + Sync + 'static,
    {
        Sha256BuilderWithError {
            config: self.config,
            error_handler: handler,
        }
    }

    /// Compute the digest on a spawned task
    ///
    /// Must be called from within a tokio runtime.
    pub fn compute<T: Into<Vec<u8>>>(self, data: T) -> AsyncHashResult {
        AsyncHashResult::new(spawn_hash(data.into(), self.config))
    }

    /// Hash `data` and compare with `expected`
    ///
    /// # Errors
    ///
    /// Returns `HashError::VerificationFailed` when the digests differ, or
    /// any error raised while hashing.
    pub async fn verify<T: Into<Vec<u8>>>(self, data: T, expected: &Digest) -> Result<()> {
        let actual = self.compute(data).await?;
        if actual.matches(expected) {
            Ok(())
        } else {
            tracing::debug!(%expected, %actual, "SHA-256 verification mismatch");
            Err(HashError::VerificationFailed)
        }
    }
}

impl<F, T> Sha256BuilderWithHandler<F, T>
where
    F: FnOnce(Result<Digest>) -> T + Send + 'static,
    T: Send + 'static,
{
    /// Compute the digest and hand the result to the handler
    pub async fn compute<D: Into<Vec<u8>>>(self, data: D) -> T {
        let data = data.into();
        let result = sha256_chunked(&data, self.config.chunk_size).await;
        (self.result_handler)(result)
    }
}

impl<E> Sha256BuilderWithError<E>
where
    E: Fn(HashError) -> HashError + Send + Sync + 'static,
{
    /// Add `on_result` handler after error handler
    ///
    /// Errors reach the result handler already mapped by the error handler.
    pub fn on_result<F, T>(
        self,
        handler: F,
    ) -> Sha256BuilderWithHandler<impl FnOnce(Result<Digest>) -> T + Send + 'static, T>
    where
        F: FnOnce(Result<Digest>) -> T + Send + 'static,
        T: Send + 'static,
    {
        let error_handler = self.error_handler;
        Sha256BuilderWithHandler {
            config: self.config,
            result_handler: move |result: Result<Digest>| handler(result.map_err(error_handler)),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Compute the digest with error mapping
    pub fn compute<D: Into<Vec<u8>>>(self, data: D) -> AsyncHashResultWithError<E> {
        AsyncHashResultWithError::new(spawn_hash(data.into(), self.config), self.error_handler)
    }
}

fn spawn_hash(data: Vec<u8>, config: Sha256Config) -> oneshot::Receiver<Result<Digest>> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        tracing::debug!(bytes = data.len(), chunk_size = config.chunk_size, "SHA-256 task started");
        let result = sha256_chunked(&data, config.chunk_size).await;
        let _ = tx.send(result);
    });

    rx
}
