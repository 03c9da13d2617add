// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::options::DebounceOptions;
use core::fmt::{self, Debug};
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use lineutils_core::LineTask;
use lineutils_runtime::mutex::MutexLike;
use lineutils_runtime::runtime::Runtime;
use lineutils_runtime::timer::Timer;
use lineutils_runtime::DefaultRuntime;
use std::sync::Arc;

type Target<A> = dyn Fn(A) + Send + Sync;

/// A debounced wrapper around a target function.
///
/// Clones share the same timer state, so every clone participates in the
/// same bursts.
///
/// Any caller context the target needs is either captured by the target
/// closure or passed as part of `A`.
///
/// `call` spawns the timer task, so it must run inside the runtime `R`.
pub struct Debounced<A, R: Runtime = DefaultRuntime> {
    inner: Arc<Inner<A, R>>,
}

struct Inner<A, R: Runtime> {
    target: Box<Target<A>>,
    wait: Duration,
    options: DebounceOptions,
    state: R::Mutex<DebounceState<R::Instant>>,
}

struct DebounceState<I> {
    generation: u64,
    pending: Option<PendingTimer>,
    last_call_at: Option<I>,
}

/// Dropping it cancels the timer task.
struct PendingTimer {
    generation: u64,
    _task: LineTask,
}

impl<A, R> Debounced<A, R>
where
    A: Send + 'static,
    R: Runtime,
{
    /// Debounce `target` on the trailing edge.
    pub fn new<F>(target: F, wait: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::with_options(target, wait, DebounceOptions::default())
    }

    pub fn with_options<F>(target: F, wait: Duration, options: DebounceOptions) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                target: Box::new(target),
                wait,
                options,
                state: MutexLike::new(DebounceState {
                    generation: 0,
                    pending: None,
                    last_call_at: None,
                }),
            }),
        }
    }

    /// Record a call and (re)start the quiet-period timer.
    ///
    /// In leading mode the target runs before this returns when no burst is in
    /// progress. A panic in the target propagates to the caller here; a panic
    /// in a trailing invocation surfaces through the runtime's task handling.
    pub fn call(&self, args: A) {
        let leading = self.inner.options.leading;
        let timer = R::Timer::default();

        let immediate = {
            let mut state = self.inner.state.lock();
            let call_now = leading && state.pending.is_none();

            state.generation = state.generation.wrapping_add(1);
            let generation = state.generation;
            state.last_call_at = Some(timer.now());

            if state.pending.take().is_some() {
                trace!("debounce timer reset, generation {}", generation);
            }

            // Leading mode never hands arguments to the timer
            let (immediate, deferred) = match (leading, call_now) {
                (true, true) => (Some(args), None),
                (true, false) => (None, None),
                (false, _) => (None, Some(args)),
            };

            let sleep = timer.sleep_future(self.inner.wait);
            let inner = Arc::clone(&self.inner);
            let task = LineTask::spawn(move |cancel| async move {
                let expired = {
                    let sleep = pin!(sleep);
                    let cancelled = pin!(cancel.cancelled());
                    matches!(select(sleep, cancelled).await, Either::Left(_))
                };

                if expired {
                    inner.expire(generation, deferred);
                }
            });

            state.pending = Some(PendingTimer {
                generation,
                _task: task,
            });

            immediate
        };

        // Lock released: the target may call back into this wrapper
        if let Some(args) = immediate {
            debug!("debounce leading invocation");
            (self.inner.target)(args);
        }
    }

    /// A `Fn` forwarding to [`call`](Self::call), for APIs that expect a plain callback.
    pub fn callback(&self) -> impl Fn(A) + Send + Sync + 'static {
        let this = self.clone();
        move |args| this.call(args)
    }

    /// Whether a burst is in progress (a timer is pending).
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Runtime instant of the most recent call, if any.
    pub fn last_call_at(&self) -> Option<R::Instant> {
        self.inner.state.lock().last_call_at
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn options(&self) -> DebounceOptions {
        self.inner.options
    }
}

impl<A, R: Runtime> Inner<A, R> {
    fn expire(&self, generation: u64, deferred: Option<A>) {
        let current = {
            let mut state = self.state.lock();
            let current = state
                .pending
                .as_ref()
                .is_some_and(|pending| pending.generation == generation);
            if current {
                state.pending = None;
            }
            current
        };

        if !current {
            trace!("stale debounce timer ignored, generation {}", generation);
            return;
        }

        if let Some(args) = deferred {
            debug!("debounce trailing invocation");
            (self.target)(args);
        }
    }
}

impl<A, R: Runtime> Clone for Debounced<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R: Runtime> Debug for Debounced<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .field("pending", &state.pending.is_some())
            .field("last_call_at", &state.last_call_at)
            .finish()
    }
}

/// Extension trait providing `debounce` on plain closures.
///
/// Uses the [`DefaultRuntime`]; build a [`Debounced`] directly to pick another.
pub trait DebounceExt<A>: Fn(A) + Send + Sync + Sized + 'static
where
    A: Send + 'static,
{
    /// Debounce on the trailing edge.
    ///
    /// # Arguments
    ///
    /// * `wait` - The quiet period required before the target runs
    fn debounce(self, wait: Duration) -> Debounced<A> {
        Debounced::new(self, wait)
    }

    fn debounce_with_options(self, wait: Duration, options: DebounceOptions) -> Debounced<A> {
        Debounced::with_options(self, wait, options)
    }
}

impl<F, A> DebounceExt<A> for F
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
}
