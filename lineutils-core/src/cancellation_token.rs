// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stop signal for superseded timer tasks.
//!
//! Every debounce reset replaces the pending timer task. The replaced task is
//! still sleeping on its runtime's timer; its token lets it wake up and exit
//! instead of running out its full wait.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{ready, Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// One-shot, shared stop signal.
///
/// Clones observe the same signal. Once [`cancel`](Self::cancel) runs on any
/// clone, [`cancelled`](Self::cancelled) resolves for all of them, now and
/// later.
///
/// # Example
///
/// A timer task races its sleep against the token; a newer call cancels it.
///
/// ```
/// use futures::executor::block_on;
/// use futures::future::{pending, select, Either};
/// use lineutils_core::CancellationToken;
/// use std::pin::pin;
///
/// let token = CancellationToken::new();
/// let timer_side = token.clone();
///
/// // A newer call superseded this timer before it expired
/// token.cancel();
///
/// let expired = block_on(async {
///     let sleep = pin!(pending::<()>());
///     let stop = pin!(timer_side.cancelled());
///     matches!(select(sleep, stop).await, Either::Left(_))
/// });
/// assert!(!expired);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    signal: Arc<Signal>,
}

#[derive(Debug)]
struct Signal {
    fired: AtomicBool,
    waiters: Event,
}

impl Default for Signal {
    fn default() -> Self {
        Self {
            fired: AtomicBool::new(false),
            waiters: Event::new(),
        }
    }
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal. Later calls do nothing.
    pub fn cancel(&self) {
        if !self.signal.fired.swap(true, Ordering::AcqRel) {
            self.signal.waiters.notify(usize::MAX);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.fired.load(Ordering::Acquire)
    }

    /// Resolves once the signal has fired.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            token: self,
            listener: None,
        }
    }
}

/// Future returned by [`CancellationToken::cancelled`].
pub struct Cancelled<'a> {
    token: &'a CancellationToken,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        // The flag is rechecked after registering, so a cancel racing the
        // registration is never missed
        loop {
            if self.token.is_cancelled() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                Some(listener) => {
                    ready!(Pin::new(listener).poll(cx));
                    self.listener = None;
                }
                None => {
                    let listener = self.token.signal.waiters.listen();
                    self.listener = Some(listener);
                }
            }
        }
    }
}
