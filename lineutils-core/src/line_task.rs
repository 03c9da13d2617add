// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic task spawning with cooperative cancellation.

use crate::CancellationToken;
use core::future::Future;

/// Handle to a background task, cancelled when dropped.
///
/// The task is spawned on the runtime selected by feature flag
/// (`runtime-tokio` by default, `runtime-smol` otherwise) and receives a
/// [`CancellationToken`] it is expected to watch.
///
/// # Example
///
/// ```rust
/// use lineutils_core::LineTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = LineTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// assert!(!task.is_cancelled());
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
pub struct LineTask {
    cancel: CancellationToken,
}

impl LineTask {
    /// Spawn `f(token)` on the active runtime.
    ///
    /// Must be called from within that runtime.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let future = f(cancel.clone());

        #[cfg(feature = "runtime-tokio")]
        tokio::spawn(future);

        #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
        smol::spawn(future).detach();

        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for LineTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
