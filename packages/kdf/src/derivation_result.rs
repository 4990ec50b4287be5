//! Future returned by asynchronous derivation

use crate::{KdfError, Result};
use pcrypt_common::NotResult;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use zeroize::Zeroizing;

type KeyMaterial = Zeroizing<Vec<u8>>;

/// Pending key material from a background derivation
pub struct DerivationResult {
    receiver: oneshot::Receiver<Result<KeyMaterial>>,
}

/// Derivation result with user-defined handler
pub struct DerivationResultWithHandler<F> {
    receiver: oneshot::Receiver<Result<KeyMaterial>>,
    handler: Option<F>,
}

impl DerivationResult {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<KeyMaterial>>) -> Self {
        Self { receiver }
    }

    /// Create a `DerivationResult` that is already completed
    #[must_use]
    pub fn ready(result: Result<KeyMaterial>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// Attach a handler that turns the `Result` into a plain value
    pub fn on_result<F, T>(self, handler: F) -> DerivationResultWithHandler<F>
    where
        F: FnOnce(Result<KeyMaterial>) -> T,
        T: NotResult,
    {
        DerivationResultWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
        }
    }
}

impl Future for DerivationResult {
    type Output = Result<KeyMaterial>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => {
                Poll::Ready(Err(KdfError::internal("Derivation task dropped")))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for DerivationResultWithHandler<F>
where
    F: FnOnce(Result<KeyMaterial>) -> T + Unpin,
    T: NotResult,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Handler already consumed by an earlier completion
        if this.handler.is_none() {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(KdfError::internal("Derivation task dropped")),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => Poll::Ready(handler(result)),
            None => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandoned() -> DerivationResult {
        let (tx, rx) = oneshot::channel();
        drop(tx);
        DerivationResult::new(rx)
    }

    #[tokio::test]
    async fn dropped_worker_resolves_to_internal() {
        assert!(matches!(abandoned().await, Err(KdfError::Internal(_))));
    }

    #[tokio::test]
    async fn handler_sees_dropped_worker_as_internal() {
        let internal = abandoned()
            .on_result(|result| matches!(result, Err(KdfError::Internal(_))))
            .await;
        assert!(internal);
    }

    #[tokio::test]
    async fn ready_result_is_returned_unchanged() {
        let material = DerivationResult::ready(Ok(Zeroizing::new(vec![7u8; 4])))
            .await
            .unwrap();
        assert_eq!(material.as_slice(), &[7u8; 4]);
    }
}
