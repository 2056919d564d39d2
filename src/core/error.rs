// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Error types for jsonprobe.
//!
//! Errors come in two layers:
//! - [`DecodeError`] - an error *value* embedded in a decoded tree; parse
//!   failures and navigation misses become nodes so lookups degrade softly
//! - [`ProbeError`] - the error returned by the fallible outer surface
//!   (strict parsing, JSON text/byte rendering)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error value embedded in a decoded value tree.
///
/// A decoder whose held value is this marker answers every scalar accessor
/// with an absent result, which lets deep navigation chains run to the end
/// without null checks at each step. The caller discovers the miss only if
/// it asks via [`Decoder::error`](crate::Decoder::error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeError {
    message: String,
    code: u32,
}

impl DecodeError {
    /// Fixed internal code carried by synthesized navigation misses.
    pub const NAVIGATION_CODE: u32 = 1002;

    /// Create a parse error carrying the underlying parser's message.
    pub fn parse(message: impl Into<String>) -> Self {
        DecodeError {
            message: message.into(),
            code: 0,
        }
    }

    /// Create a navigation miss error.
    pub fn navigation(message: impl Into<String>) -> Self {
        DecodeError {
            message: message.into(),
            code: Self::NAVIGATION_CODE,
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The internal error code.
    ///
    /// Navigation misses carry [`NAVIGATION_CODE`](Self::NAVIGATION_CODE);
    /// parse failures carry `0`.
    pub fn code(&self) -> u32 {
        self.code
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DecodeError {}

/// Errors returned by the fallible outer surface.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// An object tree could not be rendered as JSON text or bytes.
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Input was rejected by the JSON parser.
    #[error("JSON parse error: {0}")]
    Parse(String),
}

/// Result type for jsonprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
