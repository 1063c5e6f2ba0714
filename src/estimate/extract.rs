//! Candidate extraction
//!
//! Textual comment stripping followed by three independent extractors:
//! user-facing attribute values, quoted string literals and markup text
//! nodes. Everything here is pattern matching, not parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::rules::USER_FACING_ATTRS;

/// Block comments (non-greedy, multi-line) and line comments up to the line terminator
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\*[\s\S]*?\*/|//[^\n\r\x{2028}\x{2029}]*").expect("Invalid COMMENT_RE regex")
});

/// Format: title="..." / aria-label='...'
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"\b(?:{})\s*=\s*["']([^"'\n]+)["']"#,
        USER_FACING_ATTRS.join("|")
    );
    Regex::new(&pattern).expect("Invalid ATTRIBUTE_RE regex")
});

/// One alternative per quote kind; group 1/2/3 holds the body.
/// The two-unit minimum is checked by `string_literals`.
static LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#""((?:\\[^\n\r\x{2028}\x{2029}]|[^"\\\n])+)""#,
        r#"|'((?:\\[^\n\r\x{2028}\x{2029}]|[^'\\\n])+)'"#,
        r#"|`((?:\\[^\n\r\x{2028}\x{2029}]|[^`\\\n])+)`"#,
    ))
    .expect("Invalid LITERAL_RE regex")
});

/// Text between `>` and `<` that holds no tags or braces
static TEXT_NODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r">\s*([^<>{}\n][^<>{}]*)\s*<").expect("Invalid TEXT_NODE_RE regex")
});

/// Remove `/* */` and `//` comments without regard for string literals.
///
/// A `//` directly after `http:` or `https:` is a URL scheme separator and is
/// left alone.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut kept = 0;
    let mut at = 0;

    while let Some(m) = COMMENT_RE.find_at(text, at) {
        let before = &text[..m.start()];
        let url_scheme = before.ends_with("http:") || before.ends_with("https:");
        if m.as_str().starts_with("//") && url_scheme {
            at = m.start() + 1;
            continue;
        }
        out.push_str(&text[kept..m.start()]);
        kept = m.end();
        at = m.end();
    }

    out.push_str(&text[kept..]);
    out
}

/// Values of user-facing attributes such as `title` or `placeholder`
pub fn attribute_values(text: &str) -> Vec<&str> {
    ATTRIBUTE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Bodies of quoted literals whose opening quote does not follow a word
/// character, `$` or `.` (member access and tagged templates)
pub fn string_literals(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut at = 0;

    while let Some(caps) = LITERAL_RE.captures_at(text, at) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        let body = caps
            .get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();

        if follows_identifier(text, whole.start()) || literal_units(body) < 2 {
            // quotes are ASCII, so start + 1 is a char boundary
            at = whole.start() + 1;
            continue;
        }

        out.push(body);
        at = whole.end();
    }

    out
}

/// Text content between a closing `>` and the next `<`
pub fn text_nodes(text: &str) -> Vec<&str> {
    TEXT_NODE_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// All matches of the three extractors, before normalization or dedup
pub fn raw_candidates(text: &str) -> Vec<&str> {
    let mut all = attribute_values(text);
    all.extend(string_literals(text));
    all.extend(text_nodes(text));
    all
}

/// Collapse whitespace runs and trim; `None` when fewer than two UTF-16 units remain
pub fn normalize(value: &str) -> Option<String> {
    let normalized = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if utf16_len(&normalized) >= 2 {
        Some(normalized)
    } else {
        None
    }
}

/// Length in UTF-16 code units, so astral characters count twice
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Units of a literal body: UTF-16 code units, with an escape and the
/// character it escapes counted together
fn literal_units(body: &str) -> usize {
    let mut units = 0;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        let unit = if c == '\\' { chars.next().unwrap_or(c) } else { c };
        units += unit.len_utf16();
    }
    units
}

fn follows_identifier(text: &str, pos: usize) -> bool {
    text[..pos]
        .chars()
        .next_back()
        .map(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'))
        .unwrap_or(false)
}
