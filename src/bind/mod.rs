// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Binding between typed objects and JSON mappings.
//!
//! This module provides the write/read-side counterpart to
//! [`decode`](crate::decode):
//! - [`Field`] - one entry of a type's declared field list
//! - [`KeyMap`] - field-name to JSON-key renames
//! - [`JsonField`] - capability for values crossing the JSON boundary
//! - [`Serializable`] - the encode/decode drivers

pub mod field;
pub mod serial;

pub use field::{Field, JsonField, KeyMap};
pub use serial::Serializable;
