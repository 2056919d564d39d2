// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Type-probing decoder with safe navigation.
//!
//! A [`Decoder`] wraps one node of a decoded JSON tree and exposes typed
//! accessors plus indexed/keyed navigation that never fails hard: a miss
//! returns a fresh decoder holding an error marker whose accessors all
//! answer absent, so deep paths can be walked without null checks.
//!
//! ## Example
//!
//! ```
//! use jsonprobe::Decoder;
//!
//! let decoder = Decoder::parse(r#"{"user": {"name": "Ada", "logins": [3, 7]}}"#);
//! assert_eq!(decoder.entry("user").entry("name").as_str(), Some("Ada"));
//! assert_eq!(decoder.entry("user").entry("logins").at(1).as_i64(), Some(7));
//! assert!(decoder.entry("missing").at(9).as_str().is_none());
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::core::error::{DecodeError, ProbeError, Result};
use crate::core::value::DecodedValue;
use crate::decode::convert::FromDecoded;

/// Immutable wrapper around one node of a decoded JSON value tree.
///
/// Created by parsing raw text/bytes, by wrapping an already-parsed
/// [`serde_json::Value`], or by navigation from a parent decoder.
/// Navigation returns freshly cloned child decoders by value; there is no
/// back-reference to the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoder {
    value: DecodedValue,
}

impl Decoder {
    /// Wrap a decoded value directly.
    pub fn new(value: DecodedValue) -> Self {
        Decoder { value }
    }

    /// Parse JSON text into a decoder.
    ///
    /// A parse failure does not fail the caller: the returned decoder holds
    /// the error marker with the parser's message, and downstream lookups
    /// degrade softly.
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => Decoder::from_value(value),
            Err(err) => Decoder::new(DecodedValue::Error(DecodeError::parse(err.to_string()))),
        }
    }

    /// Parse raw JSON bytes into a decoder.
    ///
    /// Same soft-failure behavior as [`parse`](Self::parse).
    pub fn parse_slice(data: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(data) {
            Ok(value) => Decoder::from_value(value),
            Err(err) => Decoder::new(DecodedValue::Error(DecodeError::parse(err.to_string()))),
        }
    }

    /// Parse JSON text, surfacing a parse failure instead of embedding it.
    pub fn try_parse(text: &str) -> Result<Self> {
        let value = serde_json::from_str::<serde_json::Value>(text)
            .map_err(|err| ProbeError::Parse(err.to_string()))?;
        Ok(Decoder::from_value(value))
    }

    /// Wrap an already-parsed JSON value tree.
    ///
    /// Containers are wrapped recursively so each child is its own decoder.
    /// Numbers map to `Int` when they fit in `i64`, to `UInt` when they
    /// only fit in `u64`, and to `Double` otherwise.
    pub fn from_value(value: serde_json::Value) -> Self {
        let value = match value {
            serde_json::Value::Null => DecodedValue::Null,
            serde_json::Value::Bool(b) => DecodedValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DecodedValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    DecodedValue::UInt(u)
                } else if let Some(d) = n.as_f64() {
                    DecodedValue::Double(d)
                } else {
                    DecodedValue::Error(DecodeError::parse("unknown number format"))
                }
            }
            serde_json::Value::String(s) => DecodedValue::String(s),
            serde_json::Value::Array(items) => {
                DecodedValue::Array(items.into_iter().map(Decoder::from_value).collect())
            }
            serde_json::Value::Object(map) => DecodedValue::Object(
                map.into_iter()
                    .map(|(key, val)| (key, Decoder::from_value(val)))
                    .collect(),
            ),
        };
        Decoder::new(value)
    }

    // ========================================================================
    // Typed Accessors
    // ========================================================================

    /// The held value.
    pub fn value(&self) -> &DecodedValue {
        &self.value
    }

    /// Consume the decoder and return the held value.
    pub fn into_value(self) -> DecodedValue {
        self.value
    }

    /// Try to get the held string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the held signed integer.
    ///
    /// Strict cast: no coercion from other numeric variants.
    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            DecodedValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the held unsigned integer.
    pub fn as_u64(&self) -> Option<u64> {
        match self.value {
            DecodedValue::UInt(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the held double.
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            DecodedValue::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the held float.
    pub fn as_f32(&self) -> Option<f32> {
        match self.value {
            DecodedValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the held object mapping.
    pub fn as_object(&self) -> Option<&HashMap<String, Decoder>> {
        match &self.value {
            DecodedValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get the held array.
    pub fn as_array(&self) -> Option<&[Decoder]> {
        match &self.value {
            DecodedValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the embedded error marker, if any.
    pub fn error(&self) -> Option<&DecodeError> {
        match &self.value {
            DecodedValue::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Interpret the held value as a boolean.
    ///
    /// Evaluates in fixed priority order:
    /// - strings are lower-cased and are true when equal to `"true"` or
    ///   when they parse as an integer greater than zero
    /// - integers (signed or unsigned) are true when greater than zero
    /// - doubles and floats are true when greater than `0.99`
    /// - booleans answer themselves; everything else is false
    ///
    /// The integer `>0` versus floating `>0.99` threshold asymmetry is kept
    /// for compatibility with payloads that encode flags as `"1"`, `1`, or
    /// `1.0`.
    pub fn as_bool(&self) -> bool {
        match &self.value {
            DecodedValue::String(s) => {
                let lower = s.to_lowercase();
                lower == "true" || lower.parse::<i64>().map(|n| n > 0).unwrap_or(false)
            }
            DecodedValue::Int(v) => *v > 0,
            DecodedValue::UInt(v) => *v > 0,
            DecodedValue::Double(v) => *v > 0.99,
            DecodedValue::Float(v) => *v > 0.99,
            DecodedValue::Bool(b) => *b,
            _ => false,
        }
    }

    // ========================================================================
    // Safe Navigation
    // ========================================================================

    /// Index into a held array.
    ///
    /// Out-of-bounds access, or indexing a non-array value, returns a fresh
    /// decoder holding a navigation error; the chain never panics.
    pub fn at(&self, index: usize) -> Decoder {
        if let DecodedValue::Array(items) = &self.value {
            if let Some(item) = items.get(index) {
                return item.clone();
            }
        }
        Decoder::new(DecodedValue::Error(DecodeError::navigation(format!(
            "index: {index} is greater than array or this is not an Array type."
        ))))
    }

    /// Look up a key in a held object.
    ///
    /// A missing key, or keyed access on a non-object value, returns a
    /// fresh decoder holding a navigation error.
    pub fn entry(&self, key: &str) -> Decoder {
        if let DecodedValue::Object(map) = &self.value {
            if let Some(item) = map.get(key) {
                return item.clone();
            }
        }
        Decoder::new(DecodedValue::Error(DecodeError::navigation(format!(
            "key: {key} does not exist or this is not a Dictionary type"
        ))))
    }

    // ========================================================================
    // Printing and Bulk Extraction
    // ========================================================================

    /// Render the held value as JSON-like text. Helpful for debugging.
    ///
    /// Not a conformant encoder: strings are not escaped and object key
    /// order follows map iteration order.
    pub fn print(&self) -> String {
        self.value.to_string()
    }

    /// Append each array element convertible to `T` into `into`.
    ///
    /// The output container is allocated on the first successful
    /// conversion, so a held empty array leaves `into` as `None`.
    /// Incompatible elements are skipped silently.
    pub fn collect_array<T: FromDecoded>(&self, into: &mut Option<Vec<T>>) {
        if let DecodedValue::Array(items) = &self.value {
            for item in items {
                if let Some(value) = T::from_decoded(item) {
                    into.get_or_insert_with(Vec::new).push(value);
                }
            }
        }
    }

    /// Keyed analogue of [`collect_array`](Self::collect_array).
    pub fn collect_object<T: FromDecoded>(&self, into: &mut Option<HashMap<String, T>>) {
        if let DecodedValue::Object(map) = &self.value {
            for (key, item) in map {
                if let Some(value) = T::from_decoded(item) {
                    into.get_or_insert_with(HashMap::new)
                        .insert(key.clone(), value);
                }
            }
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(DecodedValue::Null)
    }
}

impl fmt::Display for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<serde_json::Value> for Decoder {
    fn from(value: serde_json::Value) -> Self {
        Decoder::from_value(value)
    }
}

impl From<bool> for Decoder {
    fn from(value: bool) -> Self {
        Decoder::new(DecodedValue::Bool(value))
    }
}

impl From<i64> for Decoder {
    fn from(value: i64) -> Self {
        Decoder::new(DecodedValue::Int(value))
    }
}

impl From<u64> for Decoder {
    fn from(value: u64) -> Self {
        Decoder::new(DecodedValue::UInt(value))
    }
}

impl From<f64> for Decoder {
    fn from(value: f64) -> Self {
        Decoder::new(DecodedValue::Double(value))
    }
}

impl From<f32> for Decoder {
    fn from(value: f32) -> Self {
        Decoder::new(DecodedValue::Float(value))
    }
}

impl From<&str> for Decoder {
    fn from(value: &str) -> Self {
        Decoder::new(DecodedValue::String(value.to_string()))
    }
}

impl From<String> for Decoder {
    fn from(value: String) -> Self {
        Decoder::new(DecodedValue::String(value))
    }
}
