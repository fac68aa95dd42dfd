// ABOUTME: Textual normalization of raw generator responses
// ABOUTME: Strips fences, control characters, exotic spaces, and dangling separators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Response Sanitizer
//!
//! Purely textual cleanup applied to every raw response before boundary
//! extraction. No semantic validation happens here; the steps are ordered and
//! total, and the worst possible outcome is an empty string.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing ellipsis (ASCII or Unicode) left behind by truncated output
static TRAILING_ELLIPSIS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?:\.{3,}|…)\s*$").ok());

/// Separator immediately preceding a closing delimiter
static DANGLING_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").ok());

/// Normalize raw generator output into text safe for boundary extraction
///
/// Ordered steps: fence stripping, control-character removal, Unicode space
/// normalization, trailing-ellipsis collapse, dangling-separator removal.
/// Never fails.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let text = strip_code_fences(raw);
    let text = normalize_characters(&text);
    let text = collapse_trailing_fragment(&text);
    strip_dangling_separators(&text)
}

/// Remove a leading/trailing fenced-code wrapper when present
fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();

    let without_open = if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop the info string ("json", "javascript", ...) with the fence line
        rest.split_once('\n').map_or("", |(_, body)| body)
    } else {
        trimmed
    };

    let without_close = without_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(without_open);

    without_close.trim().to_owned()
}

/// Drop C0/C1 control characters (keeping standard whitespace) and map
/// exotic Unicode space/separator characters to a regular space
fn normalize_characters(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(c),
            _ if c.is_control() => None,
            '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200B}' | '\u{2028}' | '\u{2029}'
            | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}' => Some(' '),
            _ => Some(c),
        })
        .collect()
}

/// Collapse a trailing ellipsis and any prose fragment dangling after the
/// final closing delimiter
///
/// A truncated payload can end mid-record with no closing delimiter at all;
/// the tail after the last `}` is only dropped when it carries none of the
/// structural characters a partial payload would contain.
fn collapse_trailing_fragment(text: &str) -> String {
    let mut out = text.trim_end().to_owned();

    if let Some(pattern) = TRAILING_ELLIPSIS.as_ref() {
        out = pattern.replace(&out, "").trim_end().to_owned();
    }

    if let Some(last_close) = out.rfind(['}', ']']) {
        let tail = &out[last_close + 1..];
        let is_prose = !tail.trim().is_empty()
            && !tail.contains(['{', '[', '}', ']', '"', ':']);
        if is_prose {
            out.truncate(last_close + 1);
        }
    }

    out
}

/// Remove separators immediately preceding a closing delimiter, repeatedly
///
/// Also used by the repair pass, where delimiter balancing can introduce
/// fresh `,}` / `,]` sequences.
pub(crate) fn strip_dangling_separators(text: &str) -> String {
    let Some(pattern) = DANGLING_SEPARATOR.as_ref() else {
        return text.to_owned();
    };

    let mut out = text.to_owned();
    loop {
        let replaced = pattern.replace_all(&out, "$1").into_owned();
        if replaced == out {
            return out;
        }
        out = replaced;
    }
}
