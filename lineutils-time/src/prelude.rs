// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```ignore
//! use lineutils_time::prelude::*;
//!
//! let debounced = on_change.debounce(Duration::from_millis(50));
//! ```

pub use crate::debounce::{DebounceExt, DebounceOptions, Debounced};
