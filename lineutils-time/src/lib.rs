// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced function invocation with runtime-agnostic timers.
//!
//! # Overview
//!
//! - **`Debounced<A, R>`** - Wrapper collapsing bursts of calls into one invocation
//! - **`DebounceOptions`** - Leading or trailing edge policy
//! - **`DebounceExt`** - Extension trait for `.debounce(wait)` on closures
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - timers and timer tasks on Tokio
//! - `runtime-smol` - timers on async-io, timer tasks on smol
//!
//! # Example
//!
//! ```rust,no_run
//! use lineutils_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let redraw = (|width: u32| println!("redraw at {width}px")).debounce(Duration::from_millis(100));
//!
//! // A resize storm: only the last width is drawn, 100ms after it settles
//! for width in [640, 800, 1024] {
//!     redraw.call(width);
//! }
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("lineutils-time needs a runtime: enable `runtime-tokio` or `runtime-smol`");

#[macro_use]
mod logging;

mod debounce;

pub mod prelude;

pub use debounce::{DebounceExt, DebounceOptions, Debounced};
pub use lineutils_runtime::DefaultRuntime;
