//! Small string normalization helpers shared by the extraction strategies.

use regex::Regex;
use std::sync::LazyLock;

use super::patterns::compile_regex_unsafe;

static LEADING_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"^\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))", "LEADING_FLOAT_RE")
});

/// Keeps only ASCII digits.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parses the numeric prefix of a string, ignoring anything after it (`"120 m²"` → 120.0).
pub fn leading_float(s: &str) -> Option<f64> {
    LEADING_FLOAT_RE
        .captures(s)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Rounds to the nearest integer and renders it without a fractional part.
pub fn round_to_string(value: f64) -> Option<String> {
    if value.is_finite() {
        Some(format!("{}", value.round() as i64))
    } else {
        None
    }
}

/// Returns the first `max_chars` characters, for log previews.
pub fn preview(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Trims and drops empty strings.
pub fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
