// ABOUTME: Structured payload boundary extraction from sanitized response text
// ABOUTME: Naive brace scan with an anchor-based fallback for truncated output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Structured Extractor
//!
//! Locates the machine-parseable substring inside an otherwise free-text
//! response. The naive span runs from the first opening brace to the last
//! closing brace. Large structured outputs truncate more often than they
//! corrupt in the middle, so when the naive span does not parse, the last
//! fully-formed nutrition sub-record is a more trustworthy end anchor than
//! the raw closing-delimiter count.

use regex::Regex;
use std::sync::LazyLock;

use crate::errors::{AppError, AppResult};

/// A complete meal nutrition sub-record; the innermost structure that is
/// always emitted as one short piece and therefore survives truncation
/// intact. The leading quote keeps `daily_nutrition` from matching.
pub(crate) static NUTRITION_ANCHOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""nutrition"\s*:\s*\{[^{}]*\}"#).ok());

/// Isolate the candidate structured payload from sanitized text
///
/// # Errors
///
/// Returns `NoStructureFound` when the text contains no opening brace. The
/// returned substring is a *candidate*: it may still fail parsing and move
/// on to repair.
pub fn extract(cleaned: &str) -> AppResult<String> {
    let start = cleaned.find('{').ok_or_else(AppError::no_structure_found)?;

    // Naive span: first opening brace to last closing brace
    if let Some(end) = cleaned.rfind('}') {
        if end > start {
            let naive = &cleaned[start..=end];
            if serde_json::from_str::<serde_json::Value>(naive).is_ok() {
                return Ok(naive.to_owned());
            }
        }
    }

    // The naive span is unparseable or absent: anchor on the last complete
    // nutrition sub-record and re-derive a safer end boundary.
    if let Some(anchor_end) = last_anchor_end(&cleaned[start..]) {
        let extended = extend_past_closers(cleaned, start + anchor_end);
        return Ok(cleaned[start..extended].to_owned());
    }

    // No anchor either: hand the whole tail to the repair pass
    let end = cleaned.rfind('}').map_or(cleaned.len(), |e| e + 1);
    Ok(cleaned[start..end.max(start + 1)].to_owned())
}

/// Byte offset just past the last complete nutrition sub-record, relative to
/// the given text
pub(crate) fn last_anchor_end(text: &str) -> Option<usize> {
    let pattern = NUTRITION_ANCHOR.as_ref()?;
    pattern.find_iter(text).last().map(|m| m.end())
}

/// Extend an end boundary across closing delimiters already present in the
/// text, so closers that survived truncation are not thrown away
fn extend_past_closers(text: &str, from: usize) -> usize {
    let mut end = from;
    for (offset, c) in text[from..].char_indices() {
        match c {
            '}' | ']' => end = from + offset + c.len_utf8(),
            c if c.is_whitespace() || c == ',' => {}
            _ => break,
        }
    }
    end
}
