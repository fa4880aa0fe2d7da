//! Adapter from asynchronous operations to [`Outcome`].
//!
//! An asynchronous operation settles exactly once. These adapters wait for
//! it and report fulfilment as `Success` and rejection as `Failure` carrying
//! the cause. Cancellation is a rejection: an aborted future or task yields a
//! `Failure`, never a third state. The adapters themselves never panic.

use std::future::Future;

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

use crate::control::Outcome;

impl<T, E> Outcome<T, E> {
    /// Waits for a fallible future and wraps how it settled.
    ///
    /// Cancellable futures fit as well: wrap them with
    /// [`futures::future::abortable`] and an abort surfaces as
    /// `Failure(Aborted)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::control::Outcome;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let fulfilled = Outcome::from_future(async { Ok::<_, String>(1) }).await;
    /// assert_eq!(fulfilled, Outcome::success(1));
    ///
    /// let rejected = Outcome::from_future(async { Err::<i32, _>(1) }).await;
    /// assert_eq!(rejected, Outcome::failure(1));
    /// # });
    /// ```
    pub async fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>>,
    {
        future.map(Self::from).await
    }
}

impl<T> Outcome<T, JoinError> {
    /// Waits for a spawned task.
    ///
    /// A task that was aborted or panicked yields `Failure(JoinError)`; use
    /// [`JoinError::is_cancelled`] to tell the two apart.
    pub async fn from_join_handle(handle: JoinHandle<T>) -> Self {
        let outcome = Self::from(handle.await);
        #[cfg(feature = "tracing")]
        if let Self::Failure(error) = &outcome {
            tracing::warn!(
                cancelled = error.is_cancelled(),
                panicked = error.is_panic(),
                "joined task did not complete"
            );
        }
        outcome
    }
}
