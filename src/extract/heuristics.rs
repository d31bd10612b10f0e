//! Regex heuristics over the raw HTML.
//!
//! Each field has its own named function so a false positive can be traced to
//! a single pattern. These are imprecise by nature (a phone number can look
//! like a price); only the minimum price length is enforced.

use regex::Regex;
use std::sync::LazyLock;

use super::{ExtractedProperty, Page, PartialProperty};
use crate::config::MIN_PRICE_DIGITS;
use crate::utils::compile_regex_unsafe;
use crate::utils::text::{digits_only, round_to_string};

// Amount: thousands-grouped ("1,250,000", "1 250 000") or a plain digit run
const PRICE_PREFIX_PATTERN: &str = r"\bR\s?(\d{1,3}(?:[ ,\x{A0}]\d{3})+|\d+)";
const PRICE_SUFFIX_PATTERN: &str = r"(\d{1,3}(?:[ ,\x{A0}]\d{3})+|\d+)\s?R\b";
const PRICE_KEY_PATTERN: &str = r#"(?i)["']?price["']?\s*[:=]\s*["']?(\d[\d,]*)"#;

const BEDROOMS_PATTERN: &str = r"(?i)\b(\d+)\s*-?\s*bed(?:room)?s?\b";
const BEDROOMS_KEY_PATTERN: &str = r#"(?i)["']?bedrooms["']?\s*:\s*["']?(\d+)"#;
const BATHROOMS_PATTERN: &str = r"(?i)\b(\d+)\s*-?\s*bath(?:room)?s?\b";
const BATHROOMS_KEY_PATTERN: &str = r#"(?i)["']?bathrooms["']?\s*:\s*["']?(\d+)"#;

const SIZE_PATTERN: &str =
    r"(?i)\b(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)\s*(?:m²|m&sup2;|sqm\b)";
const SIZE_KEY_PATTERN: &str =
    r#"(?i)["']?floorSize["']?\s*:\s*(?:\{[^}]*?["']?value["']?\s*:\s*)?["']?(\d+(?:\.\d+)?)"#;

static PRICE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PRICE_PREFIX_PATTERN, "PRICE_PREFIX_RE"));
static PRICE_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PRICE_SUFFIX_PATTERN, "PRICE_SUFFIX_RE"));
static PRICE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PRICE_KEY_PATTERN, "PRICE_KEY_RE"));
static BEDROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BEDROOMS_PATTERN, "BEDROOMS_RE"));
static BEDROOMS_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BEDROOMS_KEY_PATTERN, "BEDROOMS_KEY_RE"));
static BATHROOMS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BATHROOMS_PATTERN, "BATHROOMS_RE"));
static BATHROOMS_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BATHROOMS_KEY_PATTERN, "BATHROOMS_KEY_RE"));
static SIZE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(SIZE_PATTERN, "SIZE_RE"));
static SIZE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SIZE_KEY_PATTERN, "SIZE_KEY_RE"));

pub(super) fn heuristics(page: &Page<'_>, merged: &ExtractedProperty) -> PartialProperty {
    // Skip the scans whose field is already settled
    PartialProperty {
        price: merged
            .price
            .is_empty()
            .then(|| find_price(page.html))
            .flatten(),
        bedrooms: merged
            .bedrooms
            .is_empty()
            .then(|| find_bedrooms(page.html))
            .flatten(),
        bathrooms: merged
            .bathrooms
            .is_empty()
            .then(|| find_bathrooms(page.html))
            .flatten(),
        size: merged
            .size
            .is_empty()
            .then(|| find_size(page.html))
            .flatten(),
        ..Default::default()
    }
}

/// First amount with at least four digits, trying `R`-prefixed, `R`-suffixed,
/// then `price` keys.
pub(super) fn find_price(html: &str) -> Option<String> {
    [&*PRICE_PREFIX_RE, &*PRICE_SUFFIX_RE, &*PRICE_KEY_RE]
        .into_iter()
        .flat_map(|re| re.captures_iter(html))
        .filter_map(|caps| caps.get(1))
        .map(|m| digits_only(m.as_str()))
        .find(|digits| digits.len() >= MIN_PRICE_DIGITS)
}

pub(super) fn find_bedrooms(html: &str) -> Option<String> {
    first_capture(&BEDROOMS_RE, html).or_else(|| first_capture(&BEDROOMS_KEY_RE, html))
}

pub(super) fn find_bathrooms(html: &str) -> Option<String> {
    first_capture(&BATHROOMS_RE, html).or_else(|| first_capture(&BATHROOMS_KEY_RE, html))
}

/// Floor size in whole square metres.
pub(super) fn find_size(html: &str) -> Option<String> {
    first_capture(&SIZE_RE, html)
        .or_else(|| first_capture(&SIZE_KEY_RE, html))
        .and_then(|raw| raw.replace(',', "").parse::<f64>().ok())
        .and_then(round_to_string)
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_with_r_prefix_and_commas() {
        assert_eq!(
            find_price("<span>R 1,250,000</span>").as_deref(),
            Some("1250000")
        );
    }

    #[test]
    fn test_price_with_spaces_and_no_gap() {
        assert_eq!(find_price("Price: R1 250 000 neg").as_deref(), Some("1250000"));
        assert_eq!(find_price("only R2500000!").as_deref(), Some("2500000"));
    }

    #[test]
    fn test_price_rejects_short_amounts() {
        assert_eq!(find_price("<b>R 99</b>"), None);
    }

    #[test]
    fn test_price_skips_short_candidate_for_later_one() {
        assert_eq!(
            find_price("Levies R 950 per month. Asking R 1,100,000.").as_deref(),
            Some("1100000")
        );
    }

    #[test]
    fn test_price_suffix_and_key() {
        assert_eq!(find_price("<td>3 200 000 R</td>").as_deref(), Some("3200000"));
        assert_eq!(
            find_price(r#"{"listPrice": "1,750,000"}"#).as_deref(),
            Some("1750000")
        );
    }

    #[test]
    fn test_price_prefix_needs_word_boundary() {
        // "FOR 2000" must not read as "R 2000"
        assert_eq!(find_price("OFFERS FOR 2000 DAYS"), None);
    }

    #[test]
    fn test_bedrooms_and_bathrooms_text() {
        let html = "<li>3 Bedrooms</li><li>2 bathrooms</li>";
        assert_eq!(find_bedrooms(html).as_deref(), Some("3"));
        assert_eq!(find_bathrooms(html).as_deref(), Some("2"));
        assert_eq!(find_bedrooms("4-bed home").as_deref(), Some("4"));
        assert_eq!(find_bathrooms("1 Bath").as_deref(), Some("1"));
    }

    #[test]
    fn test_bedrooms_and_bathrooms_keys() {
        let html = r#"window.__DATA__ = {"bedrooms": 5, "bathrooms": "3"}"#;
        assert_eq!(find_bedrooms(html).as_deref(), Some("5"));
        assert_eq!(find_bathrooms(html).as_deref(), Some("3"));
    }

    #[test]
    fn test_size_units_and_rounding() {
        assert_eq!(find_size("Erf 85.5 m² floor").as_deref(), Some("86"));
        assert_eq!(find_size("120m&sup2;").as_deref(), Some("120"));
        assert_eq!(find_size("Floor: 1,200 sqm").as_deref(), Some("1200"));
        assert_eq!(find_size(r#""floorSize": 74.4"#).as_deref(), Some("74"));
        assert_eq!(
            find_size(r#""floorSize":{"@type":"QuantitativeValue","value":"210"}"#).as_deref(),
            Some("210")
        );
    }

    #[test]
    fn test_no_matches() {
        let html = "<p>Nothing numeric here</p>";
        assert_eq!(find_price(html), None);
        assert_eq!(find_bedrooms(html), None);
        assert_eq!(find_bathrooms(html), None);
        assert_eq!(find_size(html), None);
    }

    #[test]
    fn test_heuristics_skip_settled_fields() {
        let page = Page::new("<p>R 1,250,000 3 bedrooms</p>", "https://x.test/");
        let merged = ExtractedProperty {
            price: "999999".to_string(),
            ..Default::default()
        };
        let partial = heuristics(&page, &merged);
        assert_eq!(partial.price, None);
        assert_eq!(partial.bedrooms.as_deref(), Some("3"));
    }
}
