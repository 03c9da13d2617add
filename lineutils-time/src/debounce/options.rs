// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use lineutils_core::{LineUtilsError, Result};
use serde::{Deserialize, Serialize};

/// Edge policy of a debounced wrapper.
///
/// Deserializes from the options object used by front-end callers; missing
/// fields take their defaults and unrecognized fields are ignored.
///
/// ```
/// use lineutils_time::DebounceOptions;
///
/// let options = DebounceOptions::from_json(r#"{ "leading": true, "maxWait": 500 }"#).unwrap();
/// assert_eq!(options, DebounceOptions::leading_edge());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceOptions {
    /// Invoke on the first call of a burst instead of after it settles
    pub leading: bool,
}

impl DebounceOptions {
    #[must_use]
    pub const fn leading_edge() -> Self {
        Self { leading: true }
    }

    #[must_use]
    pub const fn trailing_edge() -> Self {
        Self { leading: false }
    }

    /// Parse options from a JSON object.
    ///
    /// # Errors
    /// Returns [`LineUtilsError::InvalidOptions`] when the document is not an
    /// object or `leading` is not a boolean.
    pub fn from_json(document: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(document)
            .map_err(|e| LineUtilsError::invalid_options(e.to_string()))?;

        // Struct derives also accept sequences; only an object is an options document
        if !parsed.is_object() {
            return Err(LineUtilsError::invalid_options(format!(
                "expected an object, got {}",
                json_kind(&parsed)
            )));
        }

        serde_json::from_value(parsed).map_err(|e| LineUtilsError::invalid_options(e.to_string()))
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
