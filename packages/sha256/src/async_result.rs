//! Async digest results resolved from spawned hashing tasks

use crate::{Digest, HashError, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Pending digest from a spawned SHA-256 task
pub struct AsyncHashResult {
    receiver: oneshot::Receiver<Result<Digest>>,
}

/// Pending digest with a user-defined result handler
pub struct AsyncHashResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<Digest>>,
    handler: Option<F>,
    completed: bool,
}

/// Pending digest with an error transformation
pub struct AsyncHashResultWithError<E> {
    receiver: oneshot::Receiver<Result<Digest>>,
    error_handler: E,
}

const TASK_DROPPED: &str = "Hash resolution task dropped";

impl AsyncHashResult {
    /// Wrap the receiving half of a hashing task's channel
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>) -> Self {
        Self { receiver }
    }

    /// Create an `AsyncHashResult` that's already completed
    #[must_use]
    pub fn ready(result: Result<Digest>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Create an `AsyncHashResult` that yields an error
    #[must_use]
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }

    /// Resolve through `handler` instead of yielding a `Result`
    pub fn on_result<F, T>(self, handler: F) -> AsyncHashResultWithHandler<F>
    where
        F: FnOnce(Result<Digest>) -> T,
    {
        AsyncHashResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
            completed: false,
        }
    }
}

impl Future for AsyncHashResult {
    type Output = Result<Digest>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(HashError::internal(TASK_DROPPED))),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncHashResultWithHandler<F>
where
    F: FnOnce(Result<Digest>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // The receiver is spent once the handler has run
        if this.completed {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(HashError::internal(TASK_DROPPED)),
            Poll::Pending => return Poll::Pending,
        };

        this.completed = true;
        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}

impl<E> AsyncHashResultWithError<E> {
    /// Wrap a task channel together with an error mapper
    pub(crate) fn new(receiver: oneshot::Receiver<Result<Digest>>, error_handler: E) -> Self {
        Self {
            receiver,
            error_handler,
        }
    }
}

impl<E> Future for AsyncHashResultWithError<E>
where
    E: Fn(HashError) -> HashError + Unpin,
{
    type Output = Result<Digest>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err((this.error_handler)(HashError::internal(TASK_DROPPED))))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_result_resolves_immediately() {
        let digest = crate::hash(b"abc").expect("hashes");
        let resolved = AsyncHashResult::ready(Ok(digest)).await.expect("resolves");
        assert_eq!(resolved, digest);
    }

    #[tokio::test]
    async fn error_result_passes_through_handler() {
        let message = AsyncHashResult::error(HashError::VerificationFailed)
            .on_result(|result| match result {
                Ok(_) => "ok".to_string(),
                Err(e) => e.to_string(),
            })
            .await;
        assert_eq!(message, "Hash verification failed");
    }

    #[test]
    fn handler_future_stays_pending_after_completion() {
        use futures::FutureExt;

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        let digest = crate::hash(b"abc").expect("hashes");
        let mut pending = AsyncHashResult::ready(Ok(digest)).on_result(|result| result.is_ok());

        assert_eq!(pending.poll_unpin(&mut cx), Poll::Ready(true));
        assert_eq!(pending.poll_unpin(&mut cx), Poll::Pending);
    }

    #[tokio::test]
    async fn dropped_sender_is_internal_error() {
        let (tx, rx) = oneshot::channel::<Result<Digest>>();
        drop(tx);
        assert!(matches!(
            AsyncHashResult::new(rx).await,
            Err(HashError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn error_handler_maps_failures() {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Err(HashError::VerificationFailed));
        let mapped = AsyncHashResultWithError::new(rx, |_| HashError::internal("mapped")).await;
        assert!(matches!(mapped, Err(HashError::Internal(msg)) if msg == "mapped"));
    }
}
