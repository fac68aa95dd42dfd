// ABOUTME: Best-effort corrective pass for malformed structured payloads
// ABOUTME: Delimiter balancing, separator cleanup, and anchor-based truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Intelligence

//! # Structure Repairer
//!
//! Invoked only after parsing or validation of a candidate payload fails.
//! Three ordered strategies run until one produces an acceptable result:
//!
//! 1. **Delimiter balancing** - append the missing closers (brackets before
//!    braces), inserted just before the outermost existing closing brace
//!    when one survives at the tail.
//! 2. **Trailing-separator cleanup** - balancing can surface fresh `,}` and
//!    `,]` sequences; remove them repeatedly.
//! 3. **Anchor-and-truncate** - cut at the last complete nutrition
//!    sub-record, close every still-open scope innermost-first, and prune a
//!    trailing half-written day.
//!
//! Strategies 1 and 2 are accepted only when the full validator passes.
//! Strategy 3 cannot invent missing days, so it is accepted once every day
//! it retains is fully formed; the orchestrator re-validates the result and
//! fails the attempt if the week is still short. `None` means no repair is
//! possible and the attempt is a hard failure.

use tracing::debug;

use super::extract::last_anchor_end;
use super::sanitize::strip_dangling_separators;
use super::validate::{day_value_is_complete, days_are_well_formed, validate};

/// Attempt to repair a candidate payload that failed parsing or validation
#[must_use]
pub fn repair(candidate: &str) -> Option<String> {
    let balanced = balance_delimiters(candidate);
    if validate(&balanced).is_ok() {
        debug!("repair accepted after delimiter balancing");
        return Some(balanced);
    }

    let separators_stripped = strip_dangling_separators(&balanced);
    if validate(&separators_stripped).is_ok() {
        debug!("repair accepted after trailing-separator cleanup");
        return Some(separators_stripped);
    }

    let truncated = anchor_and_truncate(candidate)?;
    if days_are_well_formed(&truncated) {
        debug!("repair accepted after anchor-based truncation");
        return Some(truncated);
    }

    None
}

/// Append the closers missing from the text, brackets before braces
///
/// Raw open/close counts deliberately ignore nesting. Counting cannot fix
/// an interleaved truncation (that is strategy 3's job), but it recovers
/// the common case where a whole run of closers was cut from the tail.
fn balance_delimiters(text: &str) -> String {
    let mut braces = 0_i64;
    let mut brackets = 0_i64;
    scan_structural(text, |c| match c {
        '{' => braces += 1,
        '}' => braces -= 1,
        '[' => brackets += 1,
        ']' => brackets -= 1,
        _ => {}
    });

    let missing_brackets = usize::try_from(brackets.max(0)).unwrap_or(0);
    let missing_braces = usize::try_from(braces.max(0)).unwrap_or(0);
    if missing_brackets == 0 && missing_braces == 0 {
        return text.to_owned();
    }
    let closers: String = "]".repeat(missing_brackets) + &"}".repeat(missing_braces);

    // When the braces already balance, the trailing closer is the root's
    // own; the lost brackets belong inside it, not after it.
    let trimmed = text.trim_end();
    if missing_braces == 0 {
        if let Some(body) = trimmed.strip_suffix('}') {
            return format!("{body}{closers}}}");
        }
    }
    format!("{trimmed}{closers}")
}

/// Truncate at the last complete nutrition sub-record, close every open
/// scope innermost-first, and prune a trailing half-formed day
fn anchor_and_truncate(text: &str) -> Option<String> {
    let anchor_end = last_anchor_end(text)?;
    let truncated = &text[..anchor_end];

    // Close the open meal, day, day array, and root, innermost first
    let mut closed = truncated.to_owned();
    for delimiter in open_delimiters(truncated).into_iter().rev() {
        closed.push(match delimiter {
            '[' => ']',
            _ => '}',
        });
    }

    let mut value: serde_json::Value = serde_json::from_str(&closed).ok()?;
    let days = value.get_mut("days")?.as_array_mut()?;
    while let Some(last) = days.last() {
        if day_value_is_complete(days.len() - 1, last) {
            break;
        }
        days.pop();
    }
    if days.is_empty() {
        return None;
    }

    serde_json::to_string(&value).ok()
}

/// Unclosed delimiters of the text in opening order
///
/// Assumes the text is a well-nested prefix (which anchor truncation
/// guarantees); stray closers that match nothing are ignored.
fn open_delimiters(text: &str) -> Vec<char> {
    let mut stack = Vec::new();
    scan_structural(text, |c| match c {
        '{' | '[' => stack.push(c),
        '}' => {
            if stack.last() == Some(&'{') {
                stack.pop();
            }
        }
        ']' => {
            if stack.last() == Some(&'[') {
                stack.pop();
            }
        }
        _ => {}
    });
    stack
}

/// Feed every character outside string literals to the callback
fn scan_structural(text: &str, mut f: impl FnMut(char)) {
    let mut in_string = false;
    let mut escaped = false;

    for c in text.chars() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
        } else {
            f(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_delimiters_ignores_string_contents() {
        assert_eq!(open_delimiters(r#"{"a": "look {at[ this"}"#), Vec::<char>::new());
        assert_eq!(open_delimiters(r#"{"days": [{"x": 1}"#), vec!['{', '[']);
        assert_eq!(open_delimiters(r#"{"a": "escaped \" quote", "b": ["#), vec!['{', '[']);
    }

    #[test]
    fn test_balance_inserts_before_outermost_closer() {
        // The root closer survived; the days array closer was lost
        let text = r#"{"days": [{"a": 1}}"#;
        assert_eq!(balance_delimiters(text), r#"{"days": [{"a": 1}]}"#);
    }

    #[test]
    fn test_balance_appends_when_no_trailing_closer() {
        let text = r#"{"days": [{"a": 1}"#;
        assert_eq!(balance_delimiters(text), r#"{"days": [{"a": 1}]}"#);
    }

    #[test]
    fn test_balanced_text_is_untouched() {
        let text = r#"{"days": []}"#;
        assert_eq!(balance_delimiters(text), text);
    }
}
