// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Serializable objects: field-mapped JSON encode and decode.
//!
//! A [`Serializable`] type declares an ordered field list and optional
//! JSON key renames; the provided drivers walk the declarations in both
//! directions. Decoding is best-effort: a missing key or an
//! incompatible value leaves the field at its previous value and nothing
//! is raised to the caller.

use serde_json::{Map, Value};

use crate::bind::field::{Field, KeyMap};
use crate::core::error::Result;
use crate::decode::Decoder;

/// A typed record convertible to and from a JSON-shaped mapping via its
/// declared field list.
///
/// Both the field list and the rename list are rebuilt on every call, so
/// overrides in wrapper types always take effect and no stale mapping can
/// survive between calls.
///
/// # Example
///
/// ```
/// use jsonprobe::{Decoder, Field, KeyMap, Serializable};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct User {
///     user_name: String,
///     logins: i64,
///     active: bool,
/// }
///
/// impl Serializable for User {
///     fn fields() -> Vec<Field<Self>> {
///         vec![
///             Field::bound("user_name", |u| &u.user_name, |u| &mut u.user_name),
///             Field::bound("logins", |u| &u.logins, |u| &mut u.logins),
///             Field::bound("active", |u| &u.active, |u| &mut u.active),
///         ]
///     }
///
///     fn renames() -> KeyMap {
///         KeyMap::new().rename("user_name", "userName")
///     }
/// }
///
/// let decoder = Decoder::parse(r#"{"userName": "Ada", "logins": 3, "active": "true"}"#);
/// let user = User::from_decoder(&decoder);
/// assert_eq!(user.user_name, "Ada");
/// assert_eq!(user.logins, 3);
/// assert!(user.active);
///
/// let object = user.to_object();
/// assert_eq!(object["userName"], "Ada");
/// assert_eq!(object["logins"], 3);
/// ```
pub trait Serializable {
    /// Declared fields, in order.
    fn fields() -> Vec<Field<Self>>
    where
        Self: Sized;

    /// JSON key renames; identity mapping by default.
    fn renames() -> KeyMap
    where
        Self: Sized,
    {
        KeyMap::new()
    }

    /// Hook invoked with the top-level decoder after all fields are
    /// populated, for cross-field fixups. The default does nothing.
    fn finish_decode(&mut self, _decoder: &Decoder) {}

    /// Encode the declared fields into a JSON object mapping.
    ///
    /// Nested serializable values become nested objects, sequences of
    /// serializable values become arrays of objects, scalars encode as
    /// themselves. The result is ready for an external JSON encoder.
    fn to_object(&self) -> Map<String, Value>
    where
        Self: Sized,
    {
        let renames = Self::renames();
        let mut out = Map::new();
        for field in Self::fields() {
            let key = renames.json_key(field.name());
            out.insert(key.to_owned(), field.encode_value(self));
        }
        out
    }

    /// Encode to JSON text.
    fn to_json_string(&self) -> Result<String>
    where
        Self: Sized,
    {
        Ok(serde_json::to_string(&Value::Object(self.to_object()))?)
    }

    /// Encode to JSON bytes.
    fn to_json_vec(&self) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        Ok(serde_json::to_vec(&Value::Object(self.to_object()))?)
    }

    /// Populate the declared fields from a decoder.
    ///
    /// For each field the JSON key is resolved through the rename list and
    /// fetched from the decoder. A fetch that answers the error marker is
    /// skipped and the field keeps its previous value; an incompatible
    /// value is skipped the same way and logged. Runs
    /// [`finish_decode`](Self::finish_decode) once all fields are
    /// processed.
    fn populate(&mut self, decoder: &Decoder)
    where
        Self: Sized,
    {
        let renames = Self::renames();
        for field in Self::fields() {
            let child = decoder.entry(renames.json_key(field.name()));
            if child.error().is_some() {
                continue;
            }
            field.decode_value(self, &child);
        }
        self.finish_decode(decoder);
    }

    /// Build an instance from a decoder.
    fn from_decoder(decoder: &Decoder) -> Self
    where
        Self: Default + Sized,
    {
        let mut target = Self::default();
        target.populate(decoder);
        target
    }

    /// Build an instance from JSON text.
    fn from_json_str(text: &str) -> Self
    where
        Self: Default + Sized,
    {
        Self::from_decoder(&Decoder::parse(text))
    }

    /// Build an instance from raw JSON bytes.
    ///
    /// `None` short-circuits to the default-initialized instance without
    /// invoking the decode path.
    fn from_json_slice(data: Option<&[u8]>) -> Self
    where
        Self: Default + Sized,
    {
        match data {
            Some(bytes) => Self::from_decoder(&Decoder::parse_slice(bytes)),
            None => Self::default(),
        }
    }

    /// Encode this object as a nested JSON value.
    ///
    /// Delegation target for [`JsonField`](crate::bind::JsonField) impls
    /// on nested object fields.
    fn encode_nested(&self) -> Value
    where
        Self: Sized,
    {
        Value::Object(self.to_object())
    }

    /// Decode a nested object field.
    ///
    /// Answers `None` unless the decoder holds an object mapping, so a
    /// mismatched nested field keeps its previous value.
    fn decode_nested(decoder: &Decoder) -> Option<Self>
    where
        Self: Default + Sized,
    {
        decoder.as_object()?;
        Some(Self::from_decoder(decoder))
    }
}
