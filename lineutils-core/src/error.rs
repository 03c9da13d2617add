// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the lineutils workspace
//!
//! The utilities themselves are total functions; errors only arise at the
//! dynamic edges: invoking a [`Value`](crate::Value) that is not a function,
//! building an iteratee from an unusable value, or parsing an options document.
//!
//! # Examples
//!
//! ```
//! use lineutils_core::{LineUtilsError, Result, Value};
//!
//! fn invoke(value: &Value) -> Result<Value> {
//!     value.call(&[])
//! }
//!
//! let err = invoke(&Value::from(42)).unwrap_err();
//! assert_eq!(err, LineUtilsError::not_callable("number"));
//! ```

/// Root error type for all lineutils operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineUtilsError {
    /// A value was invoked as a function but is not one
    #[error("Value is not callable: got {type_name}")]
    NotCallable {
        /// Type tag of the offending value
        type_name: &'static str,
    },

    /// A value cannot be used as a sort iteratee
    ///
    /// Only functions (derivation) and strings or numbers (key names) qualify.
    #[error("Invalid iteratee: expected a function, string or number, got {type_name}")]
    InvalidIteratee {
        /// Type tag of the offending value
        type_name: &'static str,
    },

    /// An options document could not be parsed
    #[error("Invalid options: {context}")]
    InvalidOptions {
        /// Parser diagnostic
        context: String,
    },
}

impl LineUtilsError {
    /// Create a not-callable error for a value of the given type
    #[must_use]
    pub const fn not_callable(type_name: &'static str) -> Self {
        Self::NotCallable { type_name }
    }

    /// Create an invalid-iteratee error for a value of the given type
    #[must_use]
    pub const fn invalid_iteratee(type_name: &'static str) -> Self {
        Self::InvalidIteratee { type_name }
    }

    /// Create an invalid-options error with the given context
    pub fn invalid_options(context: impl Into<String>) -> Self {
        Self::InvalidOptions {
            context: context.into(),
        }
    }
}

/// Specialized Result type for lineutils operations
pub type Result<T> = std::result::Result<T, LineUtilsError>;
