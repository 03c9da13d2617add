// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lineutils workspace.
//!
//! Intended for development and testing only.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! Records every invocation of a callback so tests can assert on how often a
//! debounced target fired and with which arguments:
//!
//! ```rust
//! use lineutils_test_utils::CallRecorder;
//!
//! let recorder = CallRecorder::new();
//! let callback = recorder.callback();
//!
//! callback(1);
//! callback(2);
//!
//! assert_eq!(recorder.calls(), vec![1, 2]);
//! ```
//!
//! ## TestData fixtures
//!
//! ```rust
//! use lineutils_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```
//!
//! # Module Organization
//!
//! - `test_data` - Enum variants and fixtures, plus `Value` renderings
//! - `person`, `animal` - Specific fixture types
//! - `recorder` - `CallRecorder`
//! - `helpers` - Paused-clock helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod helpers;
pub mod person;
pub mod recorder;
pub mod test_data;

pub use helpers::{advance_and_settle, settle};
pub use recorder::CallRecorder;
pub use test_data::TestData;
