// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Dynamically typed values and the function-type predicate.
//!
//! Front-end code hands the utilities loosely shaped data: records looked up
//! by property name, numbers, strings and callbacks mixed together. [`Value`]
//! models that data so the type predicate and key-name sorting have something
//! concrete to work on.
//!
//! # Example
//!
//! ```
//! use lineutils_core::{is_function, Value};
//!
//! let double = Value::function(|args| match args.first() {
//!     Some(Value::Number(n)) => Value::Number(n * 2.0),
//!     _ => Value::Undefined,
//! });
//!
//! assert!(is_function(&double));
//! assert!(!is_function(&Value::from("double")));
//! assert_eq!(double.call(&[Value::from(21)]).unwrap(), Value::from(42));
//! ```

use crate::error::{LineUtilsError, Result};
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::sync::Arc;

type CallFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A shared, thread-safe function value.
///
/// Two callables compare equal only when they share the same allocation,
/// which matches reference identity of functions in the data they model.
#[derive(Clone)]
pub struct Callable(Arc<CallFn>);

impl Callable {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn invoke(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Function]")
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Function(Callable),
}

static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// Wrap a closure as a function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self::Function(Callable::new(f))
    }

    /// Build an object from `(key, value)` pairs.
    ///
    /// ```
    /// use lineutils_core::Value;
    ///
    /// let point = Value::object([("n", Value::from(3))]);
    /// assert_eq!(point.get("n"), &Value::from(3));
    /// ```
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Property lookup.
    ///
    /// Objects resolve the key as a field name, arrays resolve it as an index
    /// when it parses as one. Every other case, including a missing field,
    /// yields [`Value::Undefined`].
    #[must_use]
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Self::Object(fields) => fields.get(key).unwrap_or(&UNDEFINED),
            Self::Array(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Property read as the front-end code performs it.
    ///
    /// Extends [`get`](Self::get) with the properties strings and arrays
    /// compute: `length` on both (UTF-16 code units for strings), and index
    /// lookup on strings, which yields the one-unit string at that position.
    /// A lone surrogate half reads as U+FFFD.
    ///
    /// ```
    /// use lineutils_core::Value;
    ///
    /// assert_eq!(Value::from("héllo").property("length"), Value::from(5));
    /// assert_eq!(Value::from("abc").property("1"), Value::from("b"));
    /// ```
    #[must_use]
    pub fn property(&self, key: &str) -> Value {
        match (self, key) {
            (Self::String(s), "length") => Self::from(s.encode_utf16().count()),
            (Self::Array(items), "length") => Self::from(items.len()),
            (Self::String(s), _) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| s.encode_utf16().nth(index))
                .map_or(Self::Undefined, |unit| {
                    Self::String(String::from_utf16_lossy(&[unit]))
                }),
            _ => self.get(key).clone(),
        }
    }

    /// The type tag this value would report in the front-end code it comes from.
    ///
    /// Null, arrays and objects all report `"object"`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null | Self::Array(_) | Self::Object(_) => "object",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
        }
    }

    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Invoke this value as a function.
    ///
    /// # Errors
    /// Returns [`LineUtilsError::NotCallable`] when the value is not a function.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Function(f) => Ok(f.invoke(args)),
            other => Err(LineUtilsError::not_callable(other.type_name())),
        }
    }
}

/// Returns `true` if and only if `value` is directly invocable.
///
/// An object carrying a function-valued `call` property is still an object.
#[must_use]
pub const fn is_function(value: &Value) -> bool {
    value.is_function()
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        // Lengths and indices stay far below 2^53
        #[allow(clippy::cast_precision_loss)]
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}
