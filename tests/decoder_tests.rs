// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoder integration tests.
//!
//! Tests cover:
//! - Parsing text and bytes, including malformed input
//! - Safe indexed/keyed navigation and its exact miss messages
//! - Boolean interpretation across value kinds
//! - Canonical printing round-trips
//! - Bulk extraction into lazily allocated containers

use std::collections::HashMap;

use jsonprobe::{DecodeError, Decoder};

// ============================================================================
// Test Fixtures
// ============================================================================

const PAYLOAD: &str = r#"{
    "name": "Ada",
    "age": 36,
    "score": 99.5,
    "tags": ["x", "y"],
    "address": {"city": "London", "zip": "N1"},
    "active": "true",
    "deleted": null
}"#;

fn payload() -> Decoder {
    Decoder::parse(PAYLOAD)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_parse_text_and_bytes_agree() {
    let from_text = Decoder::parse(PAYLOAD);
    let from_bytes = Decoder::parse_slice(PAYLOAD.as_bytes());
    assert_eq!(from_text, from_bytes);
}

#[test]
fn test_malformed_input_yields_error_root() {
    let decoder = Decoder::parse_slice(b"{\"name\": ");
    let err = decoder.error().expect("expected an embedded parse error");
    assert_eq!(err.code(), 0);
    assert!(!err.message().is_empty());
}

#[test]
fn test_error_root_fails_softly_everywhere() {
    let decoder = Decoder::parse("not json at all");
    assert_eq!(decoder.as_str(), None);
    assert_eq!(decoder.as_i64(), None);
    assert_eq!(decoder.as_u64(), None);
    assert_eq!(decoder.as_f64(), None);
    assert_eq!(decoder.as_object(), None);
    assert_eq!(decoder.as_array(), None);
    assert!(!decoder.as_bool());
    // Navigation on the error root synthesizes fresh misses.
    assert!(decoder.entry("a").error().is_some());
    assert!(decoder.at(0).error().is_some());
}

#[test]
fn test_wrap_parsed_value() {
    let value = serde_json::json!({"k": [1, 2]});
    let decoder = Decoder::from_value(value);
    assert_eq!(decoder.entry("k").at(1).as_i64(), Some(2));
}

// ============================================================================
// Typed Access
// ============================================================================

#[test]
fn test_typed_accessors() {
    let decoder = payload();
    assert_eq!(decoder.entry("name").as_str(), Some("Ada"));
    assert_eq!(decoder.entry("age").as_i64(), Some(36));
    assert_eq!(decoder.entry("score").as_f64(), Some(99.5));
    assert!(decoder.entry("deleted").value().is_null());
    assert_eq!(decoder.entry("tags").as_array().map(|a| a.len()), Some(2));
    assert_eq!(
        decoder.entry("address").as_object().map(|m| m.len()),
        Some(2)
    );
}

#[test]
fn test_no_numeric_coercion() {
    let decoder = payload();
    // An integer does not answer as a double, and vice versa.
    assert_eq!(decoder.entry("age").as_f64(), None);
    assert_eq!(decoder.entry("score").as_i64(), None);
    assert_eq!(decoder.entry("age").as_u64(), None);
}

// ============================================================================
// Safe Navigation
// ============================================================================

#[test]
fn test_index_miss_message() {
    let decoder = payload();
    let miss = decoder.entry("tags").at(2);
    let err = miss.error().expect("expected a navigation error");
    assert_eq!(
        err.message(),
        "index: 2 is greater than array or this is not an Array type."
    );
    assert_eq!(err.code(), DecodeError::NAVIGATION_CODE);
}

#[test]
fn test_index_on_non_array_message() {
    let miss = payload().entry("name").at(0);
    assert_eq!(
        miss.error().unwrap().message(),
        "index: 0 is greater than array or this is not an Array type."
    );
}

#[test]
fn test_key_miss_message() {
    let miss = payload().entry("nope");
    assert_eq!(
        miss.error().unwrap().message(),
        "key: nope does not exist or this is not a Dictionary type"
    );
}

#[test]
fn test_key_on_non_object_message() {
    let miss = payload().entry("tags").entry("first");
    assert_eq!(
        miss.error().unwrap().message(),
        "key: first does not exist or this is not a Dictionary type"
    );
}

#[test]
fn test_deep_chain_on_missing_path() {
    let terminal = payload().entry("a").at(0).entry("b").at(3).entry("c");
    assert!(terminal.error().is_some());
    assert_eq!(terminal.as_str(), None);
    assert!(!terminal.as_bool());
}

#[test]
fn test_navigation_returns_fresh_values() {
    let decoder = payload();
    let first = decoder.entry("address");
    let second = decoder.entry("address");
    assert_eq!(first, second);
    // Children are owned values; dropping one leaves the other usable.
    drop(first);
    assert_eq!(second.entry("city").as_str(), Some("London"));
}

// ============================================================================
// Boolean Interpretation
// ============================================================================

#[test]
fn test_boolean_truth_table() {
    let cases: &[(&str, bool)] = &[
        ("\"true\"", true),
        ("\"TRUE\"", true),
        ("\"5\"", true),
        ("\"0\"", false),
        ("1", true),
        ("0", false),
        ("1.0", true),
        ("0.5", false),
        ("0.99", false),
        ("0.991", true),
    ];
    for (text, expected) in cases {
        assert_eq!(
            Decoder::parse(text).as_bool(),
            *expected,
            "boolean interpretation of {text}"
        );
    }
}

#[test]
fn test_boolean_from_payload_string() {
    assert!(payload().entry("active").as_bool());
}

// ============================================================================
// Canonical Printing
// ============================================================================

#[test]
fn test_print_round_trips_structure() {
    let decoder = payload();
    let reparsed: serde_json::Value = serde_json::from_str(&decoder.print()).unwrap();
    let original: serde_json::Value = serde_json::from_str(PAYLOAD).unwrap();
    assert_eq!(reparsed, original);
}

#[test]
fn test_print_scalar_forms() {
    assert_eq!(Decoder::parse("42").print(), "42");
    assert_eq!(Decoder::parse("1.5").print(), "1.5");
    assert_eq!(Decoder::parse("\"hi\"").print(), "\"hi\"");
    assert_eq!(Decoder::parse("true").print(), "true");
    assert_eq!(Decoder::parse("null").print(), "null");
    assert_eq!(Decoder::parse("[1,\"a\"]").print(), "[1,\"a\"]");
}

// ============================================================================
// Bulk Extraction
// ============================================================================

#[test]
fn test_collect_array_from_payload() {
    let mut tags: Option<Vec<String>> = None;
    payload().entry("tags").collect_array(&mut tags);
    assert_eq!(tags, Some(vec!["x".to_string(), "y".to_string()]));
}

#[test]
fn test_collect_array_lazy_allocation() {
    let mut out: Option<Vec<i64>> = None;
    Decoder::parse("[]").collect_array(&mut out);
    assert_eq!(out, None, "empty array must not allocate a container");

    Decoder::parse("\"scalar\"").collect_array(&mut out);
    assert_eq!(out, None, "non-array must not allocate a container");
}

#[test]
fn test_collect_object_from_payload() {
    let mut address: Option<HashMap<String, String>> = None;
    payload().entry("address").collect_object(&mut address);
    let address = address.expect("expected a populated map");
    assert_eq!(address.get("city").map(String::as_str), Some("London"));
    assert_eq!(address.get("zip").map(String::as_str), Some("N1"));
}

#[test]
fn test_collect_object_lazy_allocation() {
    let mut out: Option<HashMap<String, i64>> = None;
    Decoder::parse("{}").collect_object(&mut out);
    assert_eq!(out, None);
}
