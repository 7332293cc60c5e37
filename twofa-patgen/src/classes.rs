// twofa-patgen/src/classes.rs
//! Character-class resolution and the fixed escape-class tables.
//!
//! Bracket expressions are resolved eagerly at parse time: ranges are
//! expanded into individual characters, in-class escapes are consumed, and
//! duplicates are removed. The escape classes (`\d`, `\D`, `\w`, `\W`, `.`)
//! draw from the fixed ASCII tables defined here.
//!
//! License: MIT OR Apache-2.0

use crate::error::ParseError;

/// Bounds of the printable ASCII range used by `.` (inclusive).
pub(crate) const PRINTABLE_MIN: u8 = 33;
pub(crate) const PRINTABLE_MAX: u8 = 126;

/// The curated punctuation/symbol set backing `\W`: ASCII 33-47, 58-64,
/// 91-94, the backtick, and 123-126.
pub(crate) static NON_WORD_CHARS: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', // 33-47
    ':', ';', '<', '=', '>', '?', '@', // 58-64
    '[', '\\', ']', '^', // 91-94
    '`', // 96
    '{', '|', '}', '~', // 123-126
];

/// One decoded element of a bracket expression body.
enum ClassItem {
    /// A literal character (escapes already consumed).
    Literal(char),
    /// An unescaped `-`, a candidate range operator.
    Dash,
}

/// Resolves the body of a `[...]` expression (without the brackets) into the
/// final character set.
///
/// `a-z`-style ranges are expanded, `\x` is kept as the literal `x`, and a
/// `-` that has no endpoint on either side stays a literal dash. The result
/// is sorted and deduplicated so that insertion order is irrelevant.
pub(crate) fn resolve_class_body(body: &str) -> Result<Vec<char>, ParseError> {
    let mut items = Vec::new();
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => items.push(ClassItem::Literal(escaped)),
                None => {
                    return Err(ParseError::UnsupportedConstruct(
                        "dangling escape in character class".to_string(),
                    ))
                }
            },
            '-' => items.push(ClassItem::Dash),
            other => items.push(ClassItem::Literal(other)),
        }
    }

    let mut resolved = Vec::new();
    let mut i = 0;
    while i < items.len() {
        match items[i] {
            ClassItem::Dash => {
                resolved.push('-');
                i += 1;
            }
            ClassItem::Literal(lo) => {
                let range_end = match (items.get(i + 1), items.get(i + 2)) {
                    (Some(ClassItem::Dash), Some(ClassItem::Literal(hi))) => Some(*hi),
                    _ => None,
                };
                match range_end {
                    Some(hi) => {
                        // Endpoints may come in either order; the resolved
                        // set is the same.
                        let (a, b) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                        resolved.extend(a..=b);
                        i += 3;
                    }
                    None => {
                        resolved.push(lo);
                        i += 1;
                    }
                }
            }
        }
    }

    resolved.sort_unstable();
    resolved.dedup();
    if resolved.is_empty() {
        return Err(ParseError::EmptyClass);
    }
    Ok(resolved)
}
