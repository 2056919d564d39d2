// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded value type system.
//!
//! Provides the tagged union behind every [`Decoder`] node. Exactly one
//! variant is active at a time and a freshly constructed decoder always
//! holds a valid variant; a failed parse yields the [`Error`] variant
//! instead of an uninitialized value.
//!
//! [`Error`]: DecodedValue::Error

use std::collections::HashMap;
use std::fmt;

use crate::core::error::DecodeError;
use crate::decode::Decoder;

/// One node of a decoded JSON value tree.
///
/// Container variants hold pre-wrapped child [`Decoder`]s, so navigation
/// hands out ready-made children rather than re-wrapping on every access.
///
/// # Design Principles
///
/// - **Owned types**: Uses owned `String` and `Vec`/`HashMap` for clarity
/// - **Errors are values**: misses live in the tree, nothing unwinds
/// - **No numeric coercion**: `Int`, `UInt`, `Double`, and `Float` are
///   distinct and the typed accessors never cross between them
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// JSON null
    Null,

    /// JSON true/false
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Unsigned integer (only used when the value exceeds `i64::MAX`)
    UInt(u64),

    /// Double-precision number
    Double(f64),

    /// Single-precision number; never produced by parsing, exists for
    /// hand-built values
    Float(f32),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of child decoders
    Array(Vec<Decoder>),

    /// Keyed mapping of child decoders
    Object(HashMap<String, Decoder>),

    /// Embedded error marker (parse failure or navigation miss)
    Error(DecodeError),
}

impl DecodedValue {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DecodedValue::Null)
    }

    /// Check if this value is the embedded error marker.
    pub fn is_error(&self) -> bool {
        matches!(self, DecodedValue::Error(_))
    }

    /// Check if this value is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(self, DecodedValue::Int(_) | DecodedValue::UInt(_))
    }

    /// Check if this value is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DecodedValue::Double(_) | DecodedValue::Float(_))
    }

    /// Check if this value is a container type (array or object).
    pub fn is_container(&self) -> bool {
        matches!(self, DecodedValue::Array(_) | DecodedValue::Object(_))
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            DecodedValue::Null => "null",
            DecodedValue::Bool(_) => "bool",
            DecodedValue::Int(_) => "int",
            DecodedValue::UInt(_) => "uint",
            DecodedValue::Double(_) => "double",
            DecodedValue::Float(_) => "float",
            DecodedValue::String(_) => "string",
            DecodedValue::Array(_) => "array",
            DecodedValue::Object(_) => "object",
            DecodedValue::Error(_) => "error",
        }
    }
}

/// Canonical printing: arrays as `[e1,e2]`, objects as `{"k": v}` in map
/// iteration order, strings double-quoted without escaping, the error
/// variant as an empty string. A debug aid, not a conformant JSON encoder.
impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Null => write!(f, "null"),
            DecodedValue::Bool(v) => write!(f, "{v}"),
            DecodedValue::Int(v) => write!(f, "{v}"),
            DecodedValue::UInt(v) => write!(f, "{v}"),
            // Route floats through serde_json's formatter so whole values
            // keep their fractional point (1.0 prints as "1.0", not "1").
            DecodedValue::Double(v) => match serde_json::Number::from_f64(*v) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{v}"),
            },
            DecodedValue::Float(v) => match serde_json::Number::from_f64(f64::from(*v)) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{v}"),
            },
            DecodedValue::String(v) => write!(f, "\"{v}\""),
            DecodedValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item.value())?;
                }
                write!(f, "]")
            }
            DecodedValue::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "\"{key}\": {}", item.value())?;
                }
                write!(f, "}}")
            }
            DecodedValue::Error(_) => Ok(()),
        }
    }
}
