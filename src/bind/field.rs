// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field descriptors and JSON key renames.
//!
//! A [`Field`] is one entry of a type's statically declared field list:
//! a name plus encode and decode accessors. The list replaces runtime
//! reflection; each serializable type declares its fields in order and the
//! drivers in [`serial`](crate::bind::serial) walk the declarations in
//! both directions. [`KeyMap`] holds the optional field-name to JSON-key
//! renames shared by both directions.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::decode::{Decoder, FromDecoded};

/// Capability for values that cross the JSON boundary as fields.
///
/// Scalars, containers of fields, and nested serializable objects all
/// implement this; field descriptors dispatch through it instead of
/// probing runtime types. Nested object types implement it by delegating
/// to [`Serializable::encode_nested`] and
/// [`Serializable::decode_nested`].
///
/// [`Serializable::encode_nested`]: crate::Serializable::encode_nested
/// [`Serializable::decode_nested`]: crate::Serializable::decode_nested
pub trait JsonField: FromDecoded {
    /// Encode this value into a plain JSON value.
    fn encode(&self) -> Value;

    /// Assign from a decoded node, keeping the current value on mismatch.
    fn bind(&mut self, decoder: &Decoder) {
        match Self::from_decoded(decoder) {
            Some(value) => *self = value,
            None => tracing::warn!(
                kind = decoder.value().type_name(),
                "incompatible value for field, keeping previous value"
            ),
        }
    }
}

impl JsonField for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl JsonField for i64 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for u64 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for f64 {
    /// Non-finite values encode as JSON null.
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for f32 {
    fn encode(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl<T: JsonField> JsonField for Vec<T> {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(JsonField::encode).collect())
    }
}

impl<T: JsonField> JsonField for Option<T> {
    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: JsonField> JsonField for HashMap<String, T> {
    fn encode(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.encode()))
                .collect(),
        )
    }
}

/// One declared field: a name plus encode and decode accessors.
pub struct Field<T> {
    name: &'static str,
    encode: Box<dyn Fn(&T) -> Value>,
    decode: Box<dyn Fn(&mut T, &Decoder)>,
}

impl<T: 'static> Field<T> {
    /// Declare a field backed by a pair of accessor projections.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonprobe::Field;
    ///
    /// struct User {
    ///     name: String,
    /// }
    ///
    /// let field: Field<User> =
    ///     Field::bound("name", |u| &u.name, |u| &mut u.name);
    /// assert_eq!(field.name(), "name");
    /// ```
    pub fn bound<V>(name: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self
    where
        V: JsonField + 'static,
    {
        Field {
            name,
            encode: Box::new(move |target| get(target).encode()),
            decode: Box::new(move |target, decoder| get_mut(target).bind(decoder)),
        }
    }

    /// Declare a field with custom encode and decode behavior.
    pub fn with(
        name: &'static str,
        encode: impl Fn(&T) -> Value + 'static,
        decode: impl Fn(&mut T, &Decoder) + 'static,
    ) -> Self {
        Field {
            name,
            encode: Box::new(encode),
            decode: Box::new(decode),
        }
    }
}

impl<T> Field<T> {
    /// The declared field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Encode the field's current value on `target`.
    pub fn encode_value(&self, target: &T) -> Value {
        (self.encode)(target)
    }

    /// Assign the decoded value to the field on `target`.
    pub fn decode_value(&self, target: &mut T, decoder: &Decoder) {
        (self.decode)(target, decoder)
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered field-name to JSON-key rename list.
///
/// Rebuilt on every encode and decode call via
/// [`Serializable::renames`](crate::Serializable::renames), never cached.
/// Registering the same field name twice keeps only the last registration,
/// so encode and decode always observe the same single mapping.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    entries: Vec<(&'static str, &'static str)>,
}

impl KeyMap {
    /// Create an empty rename list (identity mapping).
    pub fn new() -> Self {
        KeyMap::default()
    }

    /// Register a rename from `field` to `key`.
    ///
    /// A duplicate registration for `field` replaces the earlier entry and
    /// is logged.
    pub fn rename(mut self, field: &'static str, key: &'static str) -> Self {
        if let Some(slot) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            tracing::warn!(field, "duplicate rename registration, keeping the last");
            slot.1 = key;
        } else {
            self.entries.push((field, key));
        }
        self
    }

    /// Register several renames at once.
    pub fn extend(
        mut self,
        pairs: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Self {
        for (field, key) in pairs {
            self = self.rename(field, key);
        }
        self
    }

    /// Resolve a field name to its JSON key; identity when unregistered.
    pub fn json_key<'a>(&'a self, field: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, key)| *key)
            .unwrap_or(field)
    }

    /// Number of registered renames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no renames are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
