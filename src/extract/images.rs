//! Image URL harvesting and normalization.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::{ExtractedProperty, Page, PartialProperty};
use crate::utils::compile_regex_unsafe;

// src / data-src / data-lazy pointing at a raster image, optional query string
const IMAGE_ATTR_PATTERN: &str = r#"(?i)(?:data-src|data-lazy|src)\s*=\s*["']([^"'\s<>]+?\.(?:jpe?g|png|webp|gif)(?:\?[^"'\s<>]*)?)["']"#;

/// Substrings (lower-case) that mark site chrome rather than listing photos.
const SKIPPED_IMAGE_MARKERS: &[&str] = &["logo", "avatar"];

static IMAGE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IMAGE_ATTR_PATTERN, "IMAGE_ATTR_RE"));

/// Makes an image reference absolute.
///
/// - `//host/a.jpg` becomes `https://host/a.jpg`
/// - `/a.jpg` is prefixed with the page origin
/// - other relative paths are resolved against the page URL
///
/// Returns `None` for blank input, non-http(s) URLs, or relative input without a page URL.
///
/// ```
/// use listing_import::normalize_image_url;
/// use url::Url;
///
/// let page = Url::parse("https://x.test/listing/1").unwrap();
/// assert_eq!(
///     normalize_image_url("/img/a.jpg", Some(&page)).as_deref(),
///     Some("https://x.test/img/a.jpg")
/// );
/// assert_eq!(
///     normalize_image_url("//cdn.example.com/a.jpg", None).as_deref(),
///     Some("https://cdn.example.com/a.jpg")
/// );
/// ```
pub fn normalize_image_url(raw: &str, page_url: Option<&Url>) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("//") {
        return Some(format!("https:{raw}"));
    }
    if raw.starts_with('/') {
        let origin = page_url?.origin();
        if !origin.is_tuple() {
            return None;
        }
        return Some(format!("{}{}", origin.ascii_serialization(), raw));
    }

    let lowered = raw.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        return Some(raw.to_string());
    }

    // Anything else with a scheme (data:, javascript:) is not a fetchable photo
    if Url::parse(raw).is_ok() {
        return None;
    }
    let resolved = page_url?.join(raw).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Image URLs found in `src`, `data-src` and `data-lazy` attributes, logos and avatars excluded.
pub(super) fn markup_images(page: &Page<'_>, _merged: &ExtractedProperty) -> PartialProperty {
    let images = IMAGE_ATTR_RE
        .captures_iter(page.html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| normalize_image_url(m.as_str(), page.base_url.as_ref()))
        .filter(|url| !is_site_chrome(url))
        .collect();

    PartialProperty {
        images,
        ..Default::default()
    }
}

fn is_site_chrome(url: &str) -> bool {
    let lowered = url.to_lowercase();
    SKIPPED_IMAGE_MARKERS.iter().any(|m| lowered.contains(m))
}
