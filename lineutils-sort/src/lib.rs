// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stable sorting by a derived key.
//!
//! - [`sort_by`] / [`try_sort_by`] - typed slices with a derivation closure
//! - [`sort_values`] - dynamic [`Value`](lineutils_core::Value) sequences with
//!   an [`Iteratee`] (property name or function value)
//!
//! All variants return a new vector and leave the input untouched. Keys are
//! derived once per element. Equal keys keep their input order, and keys that
//! cannot be compared even with themselves (NaN, undefined, null, objects...)
//! go last, also in input order.
//!
//! # Example
//!
//! ```rust
//! use lineutils_sort::sort_by;
//!
//! let words = ["pear", "fig", "banana"];
//! let by_length = sort_by(&words, |w| w.len());
//!
//! assert_eq!(by_length, ["fig", "pear", "banana"]);
//! assert_eq!(words, ["pear", "fig", "banana"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
mod iteratee;
mod sort_by;
mod value_key;

pub use iteratee::{sort_values, Iteratee};
pub use sort_by::{sort_by, try_sort_by};
pub use value_key::ValueKey;
