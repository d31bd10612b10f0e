//! Open Graph meta tag extraction.
//!
//! Reads `og:title`, `og:description` and every `og:image` from
//! `<meta property="og:*" content="...">`. The HTML parser makes attribute order
//! irrelevant and decodes character references in attribute values.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use super::images::normalize_image_url;
use super::{ExtractedProperty, Page, PartialProperty};
use crate::utils::parse_selector_unsafe;
use crate::utils::text::non_empty;

const OG_TITLE_SELECTOR_STR: &str = r#"meta[property="og:title"]"#;
const OG_DESCRIPTION_SELECTOR_STR: &str = r#"meta[property="og:description"]"#;
const OG_IMAGE_SELECTOR_STR: &str = r#"meta[property="og:image"]"#;

static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TITLE_SELECTOR_STR, "OG_TITLE_SELECTOR"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(OG_DESCRIPTION_SELECTOR_STR, "OG_DESCRIPTION_SELECTOR")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_IMAGE_SELECTOR_STR, "OG_IMAGE_SELECTOR"));

pub(super) fn open_graph(page: &Page<'_>, _merged: &ExtractedProperty) -> PartialProperty {
    let images = page
        .document
        .select(&OG_IMAGE_SELECTOR)
        .filter_map(|element| element.value().attr("content"))
        .filter_map(|content| normalize_image_url(content, page.base_url.as_ref()))
        .collect();

    PartialProperty {
        title: meta_content(&page.document, &OG_TITLE_SELECTOR),
        description: meta_content(&page.document, &OG_DESCRIPTION_SELECTOR),
        images,
        ..Default::default()
    }
}

/// First non-blank `content` of the matching meta tags, trimmed.
fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr("content"))
        .find_map(non_empty)
}
