//! JSON-LD structured data extraction.
//!
//! Reads the first `<script type="application/ld+json">` block. The block may
//! hold one object, an array of objects, or a `@graph` of objects. Only
//! objects whose `@type` mentions a listing-like schema.org type are used.

use log::debug;
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::images::normalize_image_url;
use super::{ExtractedProperty, Page, PartialProperty};
use crate::utils::compile_regex_unsafe;
use crate::utils::text::{digits_only, leading_float, non_empty, round_to_string};

// Matches the whole script element; type attribute in either quote style, any case
const JSON_LD_PATTERN: &str =
    r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;

/// Lower-cased `@type` fragments that mark a listing object.
const LISTING_TYPES: &[&str] = &["realestate", "product", "place"];

static JSON_LD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(JSON_LD_PATTERN, "JSON_LD_RE"));

pub(super) fn json_ld(page: &Page<'_>, _merged: &ExtractedProperty) -> PartialProperty {
    let mut partial = PartialProperty::default();

    let Some(block) = first_json_ld_block(page.html) else {
        return partial;
    };

    for object in parse_json_ld(block).iter().filter(|o| is_listing(o)) {
        first(&mut partial.title, object.get("name").and_then(text_value));
        first(
            &mut partial.description,
            object.get("description").and_then(text_value),
        );
        first(&mut partial.address, object.get("address").and_then(address));

        if let Some(image) = object
            .get("image")
            .or_else(|| object.get("primaryImageOfPage"))
        {
            partial.images.extend(
                image_urls(image)
                    .into_iter()
                    .filter_map(|url| normalize_image_url(&url, page.base_url.as_ref())),
            );
        }

        first(&mut partial.price, offer_price(object));
        first(
            &mut partial.bedrooms,
            object.get("numberOfBedrooms").and_then(quantity_text),
        );
        first(
            &mut partial.bathrooms,
            object.get("numberOfBathroomsTotal").and_then(quantity_text),
        );
        first(&mut partial.size, object.get("floorSize").and_then(floor_size));
    }

    partial
}

/// Content of the first JSON-LD script element.
pub(super) fn first_json_ld_block(html: &str) -> Option<&str> {
    JSON_LD_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Parses a JSON-LD block into its top-level objects.
///
/// A malformed block yields no objects.
pub(super) fn parse_json_ld(block: &str) -> Vec<Map<String, Value>> {
    let value = match serde_json::from_str::<Value>(block) {
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring malformed JSON-LD block: {}", e);
            return Vec::new();
        }
    };

    let top_level = match value {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut objects = Vec::new();
    for item in top_level {
        if let Value::Object(mut object) = item {
            if let Some(Value::Array(graph)) = object.remove("@graph") {
                objects.extend(graph.into_iter().filter_map(|node| match node {
                    Value::Object(node) => Some(node),
                    _ => None,
                }));
            }
            objects.push(object);
        }
    }
    objects
}

fn is_listing(object: &Map<String, Value>) -> bool {
    let type_name = match object.get("@type") {
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(",")
            .to_lowercase(),
        _ => return false,
    };
    LISTING_TYPES.iter().any(|t| type_name.contains(t))
}

fn first(slot: &mut Option<String>, candidate: Option<String>) {
    if slot.is_none() {
        *slot = candidate;
    }
}

/// Text of a string or number value.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            // Whole floats print without ".0" while they fit in an i64
            (None, None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        }),
        _ => None,
    }
}

/// Unwraps schema.org `{ "value": ... }` wrappers (QuantitativeValue, PriceSpecification).
fn unwrap_value<'a>(value: &'a Value, keys: &[&str]) -> &'a Value {
    match value {
        Value::Object(object) => keys
            .iter()
            .find_map(|key| object.get(*key))
            .unwrap_or(value),
        _ => value,
    }
}

fn address(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(object) => {
            let parts: Vec<String> = ["streetAddress", "addressLocality", "addressRegion"]
                .iter()
                .filter_map(|key| object.get(*key).and_then(text_value))
                .collect();
            non_empty(&parts.join(", "))
        }
        _ => None,
    }
}

fn image_urls(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => non_empty(s).into_iter().collect(),
        Value::Array(items) => items.iter().flat_map(image_urls).collect(),
        Value::Object(object) => object
            .get("url")
            .or_else(|| object.get("contentUrl"))
            .and_then(Value::as_str)
            .and_then(non_empty)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

fn offer_price(object: &Map<String, Value>) -> Option<String> {
    let offers = object.get("offers")?;
    let offer = match offers {
        Value::Array(items) => items.first()?,
        other => other,
    };
    let price = unwrap_value(offer.get("price")?, &["value", "price"]);
    let digits = match price {
        Value::Number(n) => n.as_f64().and_then(round_to_string)?,
        Value::String(s) => digits_only(s),
        _ => return None,
    };
    (!digits.is_empty()).then_some(digits)
}

fn quantity_text(value: &Value) -> Option<String> {
    text_value(unwrap_value(value, &["value"]))
}

fn floor_size(value: &Value) -> Option<String> {
    let size = match unwrap_value(value, &["value"]) {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => leading_float(s)?,
        _ => return None,
    };
    round_to_string(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> PartialProperty {
        let page = Page::new(html, "https://x.test/listing/1");
        json_ld(&page, &ExtractedProperty::default())
    }

    fn script(json: &str) -> String {
        format!(r#"<html><head><script type="application/ld+json">{json}</script></head></html>"#)
    }

    #[test]
    fn test_json_ld_product_name_and_description() {
        let partial = run(&script(
            r#"{"@type": "Product", "name": " Garden Cottage ", "description": "Cosy cottage"}"#,
        ));
        assert_eq!(partial.title.as_deref(), Some("Garden Cottage"));
        assert_eq!(partial.description.as_deref(), Some("Cosy cottage"));
    }

    #[test]
    fn test_json_ld_ignores_non_listing_types() {
        let partial = run(&script(r#"{"@type": "WebPage", "name": "Home"}"#));
        assert_eq!(partial, PartialProperty::default());
    }

    #[test]
    fn test_json_ld_type_is_case_insensitive_and_may_be_array() {
        let upper = run(&script(r#"{"@type": "REALESTATELISTING", "name": "A"}"#));
        assert_eq!(upper.title.as_deref(), Some("A"));
        let array = run(&script(r#"{"@type": ["WebPage", "Place"], "name": "B"}"#));
        assert_eq!(array.title.as_deref(), Some("B"));
    }

    #[test]
    fn test_json_ld_address_object_skips_empty_parts() {
        let partial = run(&script(
            r#"{"@type": "Place", "address": {"streetAddress": "", "addressLocality": "Sea Point", "addressRegion": "Western Cape"}}"#,
        ));
        assert_eq!(partial.address.as_deref(), Some("Sea Point, Western Cape"));
    }

    #[test]
    fn test_json_ld_address_string() {
        let partial = run(&script(
            r#"{"@type": "Place", "address": "12 Main Rd, Claremont"}"#,
        ));
        assert_eq!(partial.address.as_deref(), Some("12 Main Rd, Claremont"));
    }

    #[test]
    fn test_json_ld_images_scalar_list_and_objects() {
        let partial = run(&script(
            r#"{"@type": "Product", "image": ["https://cdn.x.test/a.jpg", {"url": "https://cdn.x.test/b.jpg"}, {"contentUrl": "//cdn.x.test/c.jpg"}, 42]}"#,
        ));
        assert_eq!(
            partial.images,
            vec![
                "https://cdn.x.test/a.jpg",
                "https://cdn.x.test/b.jpg",
                "https://cdn.x.test/c.jpg",
            ]
        );
    }

    #[test]
    fn test_json_ld_primary_image_of_page_fallback() {
        let partial = run(&script(
            r#"{"@type": "Product", "primaryImageOfPage": {"url": "https://cdn.x.test/p.jpg"}}"#,
        ));
        assert_eq!(partial.images, vec!["https://cdn.x.test/p.jpg"]);
    }

    #[test]
    fn test_json_ld_offer_price_variants() {
        let string = run(&script(
            r#"{"@type": "Product", "offers": {"price": "R 1 995 000"}}"#,
        ));
        assert_eq!(string.price.as_deref(), Some("1995000"));

        let nested = run(&script(
            r#"{"@type": "Product", "offers": [{"price": {"value": 850000}}]}"#,
        ));
        assert_eq!(nested.price.as_deref(), Some("850000"));

        let price_specification = run(&script(
            r#"{"@type": "Product", "offers": {"price": {"price": "4500"}}}"#,
        ));
        assert_eq!(price_specification.price.as_deref(), Some("4500"));

        let fractional = run(&script(
            r#"{"@type": "Product", "offers": {"price": 1250000.5}}"#,
        ));
        assert_eq!(fractional.price.as_deref(), Some("1250001"));
    }

    #[test]
    fn test_json_ld_rooms_and_floor_size() {
        let partial = run(&script(
            r#"{"@type": "RealEstateListing", "numberOfBedrooms": 3, "numberOfBathroomsTotal": "2", "floorSize": {"value": "145.6 m2"}}"#,
        ));
        assert_eq!(partial.bedrooms.as_deref(), Some("3"));
        assert_eq!(partial.bathrooms.as_deref(), Some("2"));
        assert_eq!(partial.size.as_deref(), Some("146"));
    }

    #[test]
    fn test_json_ld_large_numbers_are_not_clamped() {
        let partial = run(&script(
            r#"{"@type": "RealEstateListing", "numberOfBedrooms": 4.0, "numberOfBathroomsTotal": 18446744073709551615, "name": 1e20}"#,
        ));
        assert_eq!(partial.bedrooms.as_deref(), Some("4"));
        assert_eq!(partial.bathrooms.as_deref(), Some("18446744073709551615"));
        let title = partial.title.expect("numeric name kept");
        assert_ne!(title, i64::MAX.to_string());
        assert_eq!(title.parse::<f64>().ok(), Some(1e20));
    }

    #[test]
    fn test_json_ld_array_first_listing_object_wins() {
        let partial = run(&script(
            r#"[{"@type": "Organization", "name": "Agency"}, {"@type": "Product", "name": "First"}, {"@type": "Product", "name": "Second", "description": "From second"}]"#,
        ));
        assert_eq!(partial.title.as_deref(), Some("First"));
        assert_eq!(partial.description.as_deref(), Some("From second"));
    }

    #[test]
    fn test_json_ld_graph_nodes() {
        let partial = run(&script(
            r#"{"@context": "https://schema.org", "@graph": [{"@type": "WebSite"}, {"@type": "Product", "name": "In graph"}]}"#,
        ));
        assert_eq!(partial.title.as_deref(), Some("In graph"));
    }

    #[test]
    fn test_json_ld_only_first_block_is_read() {
        let html = format!(
            "{}{}",
            script(r#"{"@type": "WebPage"}"#),
            script(r#"{"@type": "Product", "name": "Second block"}"#)
        );
        assert_eq!(run(&html).title, None);
    }

    #[test]
    fn test_json_ld_malformed_block_is_ignored() {
        let partial = run(&script(r#"{"@type": "Product", "name": "Trunc"#));
        assert_eq!(partial, PartialProperty::default());
    }

    #[test]
    fn test_json_ld_single_quoted_uppercase_type_attribute() {
        let html = r#"<script TYPE='APPLICATION/LD+JSON'>{"@type": "Product", "name": "Quoted"}</script>"#;
        assert_eq!(run(html).title.as_deref(), Some("Quoted"));
    }

    #[test]
    fn test_first_json_ld_block_missing() {
        assert_eq!(first_json_ld_block("<html><body>none</body></html>"), None);
    }
}
