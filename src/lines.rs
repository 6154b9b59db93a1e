//! Line splitting, filtering, ordering and joining
//!
//! Lines borrow from the text they were split out of; nothing is copied
//! until the sorted output is joined back together.

use crate::config::Comparison;
use std::cmp::Ordering;

/// Split `text` into lines, accepting `\n`, `\r\n` and a lone `\r` as
/// terminators.
///
/// Terminators are stripped, all other whitespace is kept. A terminator at
/// the very end does not start another line, so `"a\nb\n"` and `"a\nb"`
/// both give `["a", "b"]` and `""` gives no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Whether a line holds nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop blank lines, keeping the order of the rest. Returns how many were dropped.
pub fn retain_non_blank(lines: &mut Vec<&str>) -> usize {
    let before = lines.len();
    lines.retain(|line| !is_blank(line));
    before - lines.len()
}

/// Compare two lines the way [`sort_lines_by`] orders them
pub fn compare_lines(a: &str, b: &str, comparison: Comparison) -> Ordering {
    match comparison {
        Comparison::CaseSensitive => a.cmp(b),
        Comparison::CaseInsensitive => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Stable sort of `lines`.
///
/// Case-insensitive keys are lowercased once per line rather than on every
/// comparison. Lines that differ only in case stay in input order.
pub fn sort_lines_by(lines: &mut [&str], comparison: Comparison) {
    match comparison {
        Comparison::CaseSensitive => lines.sort(),
        Comparison::CaseInsensitive => lines.sort_by_cached_key(|line| line.to_lowercase()),
    }
}

/// Join lines back into text, each followed by exactly one `\n`
pub fn join_lines(lines: &[&str]) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
