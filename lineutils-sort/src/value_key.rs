// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::cmp::Ordering;
use lineutils_core::Value;

/// Orders dynamic values for use as sort keys.
///
/// Booleans, numbers and strings are comparable: `false < true`, numbers
/// numerically, strings by code point. Across kinds, booleans sort before
/// numbers and numbers before strings. Everything else (undefined, null, NaN,
/// arrays, objects, functions) is incomparable, including with itself.
#[derive(Debug, Clone)]
pub struct ValueKey(pub Value);

impl ValueKey {
    fn kind_rank(&self) -> Option<u8> {
        match &self.0 {
            Value::Bool(_) => Some(0),
            Value::Number(n) if !n.is_nan() => Some(1),
            Value::String(_) => Some(2),
            _ => None,
        }
    }
}

impl PartialOrd for ValueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (rank, other_rank) = (self.kind_rank()?, other.kind_rank()?);

        match (&self.0, &other.0) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => Some(rank.cmp(&other_rank)),
        }
    }
}

impl PartialEq for ValueKey {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
