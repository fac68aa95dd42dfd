// ABOUTME: Integration tests for the sanitize, extract, validate pipeline
// ABOUTME: Covers fenced, noisy, and prose-wrapped generator responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence
#![allow(missing_docs)]

mod common;

use common::valid_week_json;
use nutriplan::errors::ErrorCode;
use nutriplan::generation::extract::extract;
use nutriplan::generation::sanitize::sanitize;
use nutriplan::generation::validate::validate;

#[test]
fn test_fenced_noisy_response_parses_without_repair() {
    // Fenced markers, embedded control characters, and a dangling comma
    // before the final closing brace: sanitation alone must be enough.
    let full = valid_week_json();
    let with_dangling_comma = format!("{},}}", &full[..full.len() - 1]);
    let noisy = with_dangling_comma.replace("\"lunch\"", "\u{0007}\"lunch\"");
    let raw = format!("```json\n{noisy}\n```");

    let cleaned = sanitize(&raw);
    let candidate = extract(&cleaned).expect("payload should be found");

    // Direct parse, no repair pass involved
    let menu = validate(&candidate).expect("sanitized payload should validate directly");
    assert_eq!(menu.days().len(), 7);
}

#[test]
fn test_prose_wrapped_payload_is_isolated() {
    let raw = format!(
        "Of course! Here is a balanced week for you:\n\n{}\n\nEnjoy your meals!",
        valid_week_json()
    );

    let cleaned = sanitize(&raw);
    let candidate = extract(&cleaned).expect("payload should be found");
    let menu = validate(&candidate).expect("payload should validate");
    assert_eq!(menu.days().len(), 7);
}

#[test]
fn test_exotic_whitespace_is_normalized() {
    let full = valid_week_json();
    let exotic = full.replace(' ', "\u{00A0}");

    let cleaned = sanitize(&exotic);
    let candidate = extract(&cleaned).expect("payload should be found");
    assert!(validate(&candidate).is_ok());
}

#[test]
fn test_refusal_text_yields_no_structure_found() {
    let cleaned = sanitize("I'm sorry, I can't generate a meal plan right now.");
    let error = extract(&cleaned).unwrap_err();
    assert_eq!(error.code, ErrorCode::NoStructureFound);
}

#[test]
fn test_wrong_day_count_is_rejected_with_detail() {
    let full = valid_week_json();
    // Drop the last day object entirely but keep the payload well-formed
    let last_day_start = full.rfind("{\"day_name\"").unwrap();
    let short = format!(
        "{}]}}",
        full[..last_day_start].trim_end().trim_end_matches(',')
    );

    let candidate = extract(&sanitize(&short)).expect("payload should be found");
    let error = validate(&candidate).unwrap_err();

    assert_eq!(error.code, ErrorCode::SchemaError);
    assert!(error.message.contains("found 6"));
}

#[test]
fn test_truncated_response_extracts_up_to_last_anchor() {
    let full = valid_week_json();
    // Truncate mid-way through the final day's dinner name
    let cut = full.rfind("curry").unwrap();
    let truncated = &full[..cut];

    let candidate = extract(&sanitize(truncated)).expect("anchor should be found");

    // The candidate ends cleanly after a complete nutrition record
    assert!(candidate.rfind("\"nutrition\"").is_some());
    assert!(!candidate.ends_with("\"Sunday "));
}
