// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced function invocation.
//!
//! A debounced wrapper collapses a burst of calls into at most one invocation
//! of its target per quiet period of `wait`:
//!
//! - Every call (re)starts the timer; a still-running timer is superseded and
//!   never fires
//! - **Trailing** (default): the target runs once the timer expires, with the
//!   arguments of the last call of the burst
//! - **Leading**: the target runs synchronously on the first call of a burst;
//!   the timer only tracks the burst and never invokes the target
//!
//! Leading and trailing are mutually exclusive. There is no cancellation: a
//! pending trailing call can only be deferred by a later call, never dropped.
//!
//! # Example
//!
//! ```rust
//! use lineutils_time::{DebounceExt, DebounceOptions};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let clicks = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&clicks);
//! let on_click = (move |_: ()| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! })
//! .debounce_with_options(Duration::from_millis(300), DebounceOptions::leading_edge());
//!
//! // Double click: the first click fires immediately, the second is absorbed
//! on_click.call(());
//! on_click.call(());
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//! # }
//! ```

mod implementation;
mod options;

pub use implementation::{DebounceExt, Debounced};
pub use options::DebounceOptions;
