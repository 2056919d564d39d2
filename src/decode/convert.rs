// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversions from decoded nodes into plain Rust values.
//!
//! Used by the bulk extraction helpers on [`Decoder`] and by the field
//! binding layer when populating typed objects.

use std::collections::HashMap;

use crate::decode::Decoder;

/// Conversion from a decoded node into a plain value.
///
/// Scalar conversions mirror the decoder's typed accessors: strict casts
/// with no coercion between numeric variants. `bool` is the exception and
/// follows [`Decoder::as_bool`], so it converts from any value. Containers
/// convert element-wise, skipping incompatible elements.
pub trait FromDecoded: Sized {
    /// Try to convert the decoder's held value into `Self`.
    fn from_decoded(decoder: &Decoder) -> Option<Self>;
}

impl FromDecoded for String {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        decoder.as_str().map(str::to_owned)
    }
}

impl FromDecoded for i64 {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        decoder.as_i64()
    }
}

impl FromDecoded for u64 {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        decoder.as_u64()
    }
}

impl FromDecoded for f64 {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        decoder.as_f64()
    }
}

impl FromDecoded for f32 {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        decoder.as_f32()
    }
}

impl FromDecoded for bool {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        Some(decoder.as_bool())
    }
}

impl<T: FromDecoded> FromDecoded for Vec<T> {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        let items = decoder.as_array()?;
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            match T::from_decoded(item) {
                Some(value) => out.push(value),
                None => tracing::warn!(
                    kind = item.value().type_name(),
                    "skipping array element with incompatible type"
                ),
            }
        }
        Some(out)
    }
}

impl<T: FromDecoded> FromDecoded for Option<T> {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        // JSON null clears the optional; a conversion failure keeps the
        // caller's previous value instead.
        if decoder.value().is_null() {
            return Some(None);
        }
        T::from_decoded(decoder).map(Some)
    }
}

impl<T: FromDecoded> FromDecoded for HashMap<String, T> {
    fn from_decoded(decoder: &Decoder) -> Option<Self> {
        let map = decoder.as_object()?;
        let mut out = HashMap::with_capacity(map.len());
        for (key, item) in map {
            match T::from_decoded(item) {
                Some(value) => {
                    out.insert(key.clone(), value);
                }
                None => tracing::warn!(
                    key = key.as_str(),
                    kind = item.value().type_name(),
                    "skipping entry with incompatible type"
                ),
            }
        }
        Some(out)
    }
}
