// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub mod line_task;
pub mod value;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{LineUtilsError, Result};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use self::line_task::LineTask;
pub use self::value::{is_function, Callable, Value};
