// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::sort_by::sort_by;
use crate::value_key::ValueKey;
use lineutils_core::{Callable, LineUtilsError, Result, Value};

/// How to derive a sort key from a dynamic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Iteratee {
    /// Property name read from each element (see [`Value::property`]); missing
    /// properties are undefined
    Key(String),
    /// Function called with the element as its only argument
    Function(Callable),
}

impl Iteratee {
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Wrap a unary closure as a derivation function.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::Function(Callable::new(move |args| {
            let undefined = Value::Undefined;
            f(args.first().unwrap_or(&undefined))
        }))
    }

    /// Interpret a dynamic value as an iteratee.
    ///
    /// Functions derive keys; strings and numbers name a property.
    ///
    /// # Errors
    /// Returns [`LineUtilsError::InvalidIteratee`] for any other value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Function(f) => Ok(Self::Function(f.clone())),
            Value::String(name) => Ok(Self::Key(name.clone())),
            Value::Number(n) => Ok(Self::Key(number_key(*n))),
            other => Err(LineUtilsError::invalid_iteratee(other.type_name())),
        }
    }

    /// Derive the key for one element.
    #[must_use]
    pub fn resolve(&self, item: &Value) -> Value {
        match self {
            Self::Key(name) => item.property(name),
            Self::Function(f) => f.invoke(core::slice::from_ref(item)),
        }
    }
}

impl From<&str> for Iteratee {
    fn from(name: &str) -> Self {
        Self::key(name)
    }
}

impl From<String> for Iteratee {
    fn from(name: String) -> Self {
        Self::Key(name)
    }
}

/// Render a number the way it reads as a property name: `-0` is `"0"`, and
/// magnitudes from 1e21 up or below 1e-6 use exponent form (`1e+21`).
fn number_key(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    if n.is_infinite() {
        let sign = if n.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) || n.is_nan() {
        return n.to_string();
    }

    let exponent_form = format!("{n:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

/// Sort dynamic values ascending by the key `iteratee` derives.
///
/// Ordering of keys follows [`ValueKey`]; elements whose key is incomparable
/// (typically a missing property) go last in input order.
///
/// # Examples
///
/// ```rust
/// use lineutils_core::Value;
/// use lineutils_sort::{sort_values, Iteratee};
///
/// let point = |n: i32| Value::object([("n", Value::from(n))]);
/// let sorted = sort_values(&[point(3), point(1), point(2)], &Iteratee::key("n"));
///
/// assert_eq!(sorted, vec![point(1), point(2), point(3)]);
/// ```
pub fn sort_values(items: &[Value], iteratee: &Iteratee) -> Vec<Value> {
    sort_by(items, |item| ValueKey(iteratee.resolve(item)))
}
