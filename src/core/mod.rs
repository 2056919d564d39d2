// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout jsonprobe.
//!
//! This module provides the foundational types for the library:
//! - [`DecodeError`] - error marker embedded in decoded trees
//! - [`ProbeError`] - error for the fallible outer surface
//! - [`DecodedValue`] - tagged union behind every decoder node

pub mod error;
pub mod value;

pub use error::{DecodeError, ProbeError, Result};
pub use value::DecodedValue;
