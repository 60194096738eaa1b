//! HTML text utilities.
//!
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `unescape()` - entity decoding
//! - `strip_tags()` - markup removal, yields plain text
//! - `truncate()` - character budget cutting under a [`TruncateMode`]

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
/// Unknown entities are kept as written.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find('&') {
        result.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // Entity body is at most 10 chars and must end with ';'
        let end = rest
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);

        let Some(end) = end else {
            result.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..end];
        match decode_entity(entity) {
            Some(c) => result.push(c),
            None => result.push_str(&rest[..=end]),
        }
        rest = &rest[end + 1..];
    }
    result.push_str(rest);

    Cow::Owned(result)
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        s if s.starts_with("#x") || s.starts_with("#X") => {
            u32::from_str_radix(&s[2..], 16).ok().map(numeric_char)
        }
        s if s.starts_with('#') => s[1..].parse().ok().map(numeric_char),
        _ => None,
    }
}

/// Character for a numeric reference. NUL, surrogates, out-of-range values and
/// ASCII controls other than whitespace become U+FFFD.
fn numeric_char(code: u32) -> char {
    match char::from_u32(code) {
        Some(c) if c.is_ascii_control() && !matches!(c, '\t' | '\n' | '\x0C' | '\r') => {
            char::REPLACEMENT_CHARACTER
        }
        Some(c) => c,
        None => char::REPLACEMENT_CHARACTER,
    }
}

// =============================================================================
// Markup Stripping
// =============================================================================

/// Comments first so a `>` inside a comment doesn't end the match early.
static RE_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap());

/// Remove embedded tags and comments, then decode entities.
///
/// The result is plain text; escape it again before writing it into HTML.
///
/// # Example
/// ```ignore
/// assert_eq!(strip_tags("<em>Hello</em> &amp; bye"), "Hello & bye");
/// ```
pub fn strip_tags(s: &str) -> String {
    let stripped = RE_MARKUP.replace_all(s, "");
    unescape(stripped.trim()).into_owned()
}

// =============================================================================
// Truncation
// =============================================================================

/// Where a truncated text may be cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateMode {
    /// Cut at exactly `limit` characters.
    #[default]
    Chars,
    /// Cut at the last whitespace within `limit` characters.
    Words,
}

/// Cut `s` to at most `limit` characters, appending `ellipsis` if anything was cut.
///
/// Counts Unicode scalar values, so a cut never splits a character.
pub fn truncate<'a>(s: &'a str, limit: usize, mode: TruncateMode, ellipsis: &str) -> Cow<'a, str> {
    let Some((cut, _)) = s.char_indices().nth(limit) else {
        return Cow::Borrowed(s);
    };

    let head = &s[..cut];
    let head = match mode {
        TruncateMode::Chars => head,
        TruncateMode::Words => match head.rfind(char::is_whitespace) {
            // Cut lands exactly on a word boundary: keep the whole head
            _ if s[cut..].starts_with(char::is_whitespace) => head.trim_end(),
            Some(space) if space > 0 => head[..space].trim_end(),
            _ => head,
        },
    };

    Cow::Owned(format!("{head}{ellipsis}"))
}

// =============================================================================
// Tests
// =============================================================================
