// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # lineutils
//!
//! Small, independent utilities for charting front-ends, gathered behind one
//! namespace value:
//!
//! - **Type predicate**: does a value invoke as a function?
//! - **Keyed sort**: a new, stably ordered sequence by a derived key
//! - **Debounce**: collapse bursts of calls into one invocation per quiet period
//!
//! ## Overview
//!
//! Each utility lives in its own crate and can be used directly:
//!
//! - `lineutils-core` - [`Value`], [`is_function`], [`LineUtilsError`]
//! - `lineutils-sort` - [`sort_by`], [`try_sort_by`], [`sort_values`], [`Iteratee`]
//! - `lineutils-time` - [`Debounced`], [`DebounceOptions`], [`DebounceExt`]
//!
//! [`LineUtils`] bundles them for callers that want a single handle.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lineutils::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let utils = LineUtils::new();
//!
//!     let points = vec![
//!         Value::object([("n", Value::from(3))]),
//!         Value::object([("n", Value::from(1))]),
//!     ];
//!     let sorted = utils.sort_values(&points, &"n".into());
//!     assert_eq!(sorted[0].get("n"), &Value::from(1));
//!
//!     let resize = utils.debounce(|width: u32| println!("{width}"), Duration::from_millis(100));
//!     resize.call(640);
//!     resize.call(800);
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

use core::time::Duration;

pub use lineutils_core::{is_function, Callable, LineUtilsError, Result, Value};
pub use lineutils_sort::{sort_by, sort_values, try_sort_by, Iteratee, ValueKey};
pub use lineutils_time::{DebounceExt, DebounceOptions, Debounced, DefaultRuntime};

/// The utility namespace.
///
/// Stateless: every wrapper returned by [`debounce`](Self::debounce) owns its
/// own timer state, so any number of `LineUtils` values may coexist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineUtils;

impl LineUtils {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Whether `value` is directly invocable.
    #[must_use]
    pub const fn is_function(&self, value: &Value) -> bool {
        is_function(value)
    }

    /// Stable sort of `items` by the key `iteratee` derives, into a new vector.
    pub fn sort_by<T, K, F>(&self, items: &[T], iteratee: F) -> Vec<T>
    where
        T: Clone,
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        sort_by(items, iteratee)
    }

    /// Stable sort of dynamic values by property name or derivation function.
    #[must_use]
    pub fn sort_values(&self, items: &[Value], iteratee: &Iteratee) -> Vec<Value> {
        sort_values(items, iteratee)
    }

    /// Like [`sort_values`](Self::sort_values), with the iteratee itself given
    /// as a dynamic value (function, property name or index).
    ///
    /// # Errors
    /// Returns [`LineUtilsError::InvalidIteratee`] when `iteratee` is neither.
    pub fn sort_values_by(&self, items: &[Value], iteratee: &Value) -> Result<Vec<Value>> {
        let iteratee = Iteratee::from_value(iteratee)?;
        Ok(sort_values(items, &iteratee))
    }

    /// Debounce `target` on the trailing edge.
    pub fn debounce<A, F>(&self, target: F, wait: Duration) -> Debounced<A>
    where
        A: Send + 'static,
        F: Fn(A) + Send + Sync + 'static,
    {
        Debounced::new(target, wait)
    }

    pub fn debounce_with_options<A, F>(
        &self,
        target: F,
        wait: Duration,
        options: DebounceOptions,
    ) -> Debounced<A>
    where
        A: Send + 'static,
        F: Fn(A) + Send + Sync + 'static,
    {
        Debounced::with_options(target, wait, options)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::LineUtils;
    pub use lineutils_core::{is_function, Value};
    pub use lineutils_sort::{sort_by, Iteratee};
    pub use lineutils_time::{DebounceExt, DebounceOptions, Debounced};
}
