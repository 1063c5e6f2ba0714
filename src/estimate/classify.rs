//! Code-like string classification

use once_cell::sync::Lazy;
use regex::Regex;

/// URLs, absolute paths, fragments/ids and class selectors
const CODE_PREFIXES: &[&str] = &["http://", "https://", "/", "#", "."];

/// Characters that only show up in code or template syntax
const CODE_SYNTAX: &[char] = &['{', '}', '(', ')', '[', ']', '='];

/// Namespaced keys and file names: `app.title`, `logo.png`
static DOTTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)+$").expect("Invalid DOTTED_RE regex")
});

/// SCREAMING_CASE constants and enum members
static CONSTANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("Invalid CONSTANT_RE regex"));

/// Numbers, times, percentages and similar format strings
static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s.,:%+-]+$").expect("Invalid NUMERIC_RE regex"));

/// Whether a candidate looks technical rather than user-facing
pub fn is_code_like(value: &str) -> bool {
    let s = value.trim();

    s.is_empty()
        || CODE_PREFIXES.iter().any(|prefix| s.starts_with(prefix))
        || DOTTED_RE.is_match(s)
        || CONSTANT_RE.is_match(s)
        || NUMERIC_RE.is_match(s)
        || s.contains(CODE_SYNTAX)
}
