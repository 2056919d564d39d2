// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # jsonprobe
//!
//! Reflective bridge between arbitrary JSON payloads and typed domain
//! objects.
//!
//! The library has two components:
//! - **Decoding** in the [`decode`] module: a [`Decoder`] wraps one parsed
//!   JSON value into a navigable, type-probing structure. Navigation never
//!   fails hard; a miss produces a decoder holding an error marker whose
//!   accessors all answer absent, so deep paths need no null checks.
//! - **Binding** in the [`bind`] module: a [`Serializable`] type declares
//!   its field list (with optional JSON key renames) once and gets both
//!   directions for free: encoding to a JSON object mapping and populating
//!   its fields from a decoder.
//!
//! JSON text itself is parsed and rendered by serde_json; this library
//! wraps its value trees, it does not tokenize.
//!
//! ## Example: probing a payload
//!
//! ```
//! use jsonprobe::Decoder;
//!
//! let decoder = Decoder::parse(r#"{"user": {"name": "Ada", "logins": [3, 7]}}"#);
//! assert_eq!(decoder.entry("user").entry("name").as_str(), Some("Ada"));
//! assert_eq!(decoder.entry("user").entry("logins").at(1).as_i64(), Some(7));
//!
//! // A missing path degrades to an error value instead of panicking.
//! let miss = decoder.entry("missing").at(9);
//! assert!(miss.error().is_some());
//! assert_eq!(miss.as_str(), None);
//! ```
//!
//! ## Example: field-mapped binding
//!
//! ```
//! use jsonprobe::{Field, KeyMap, Serializable};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     user_name: String,
//!     active: bool,
//! }
//!
//! impl Serializable for User {
//!     fn fields() -> Vec<Field<Self>> {
//!         vec![
//!             Field::bound("user_name", |u| &u.user_name, |u| &mut u.user_name),
//!             Field::bound("active", |u| &u.active, |u| &mut u.active),
//!         ]
//!     }
//!
//!     fn renames() -> KeyMap {
//!         KeyMap::new().rename("user_name", "userName")
//!     }
//! }
//!
//! let user = User::from_json_str(r#"{"userName": "Ada", "active": "true"}"#);
//! assert_eq!(user.user_name, "Ada");
//! assert!(user.active);
//! assert_eq!(user.to_object()["userName"], "Ada");
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{DecodeError, DecodedValue, ProbeError, Result};

// Decoding
pub mod decode;

pub use decode::{Decoder, FromDecoded};

// Object binding
pub mod bind;

pub use bind::{Field, JsonField, KeyMap, Serializable};
