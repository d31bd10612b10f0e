//! Listing extraction.
//!
//! Turns a fetched listing page into an [`ExtractedProperty`] by running an
//! ordered list of strategies over the page:
//! - Open Graph meta tags (`og:title`, `og:description`, `og:image`)
//! - JSON-LD structured data (schema.org RealEstateListing / Product / Place)
//! - Regex heuristics over the raw HTML (price, bedrooms, bathrooms, size)
//! - Property type inference from keywords
//! - Image harvesting from `src` / `data-src` / `data-lazy` attributes
//! - Feature keyword detection
//! - YouTube / Vimeo link detection
//!
//! Each strategy is a pure function producing a [`PartialProperty`]. The merge
//! step gives scalar fields to the first strategy that produces them and
//! accumulates list fields with de-duplication. Extraction never fails: a
//! source that is missing or malformed simply contributes nothing.

mod classify;
mod features;
mod heuristics;
mod images;
mod meta;
mod structured;
mod video;

use log::debug;
use scraper::Html;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::MAX_IMAGES;

pub use classify::PropertyType;
pub use features::Feature;
pub use images::normalize_image_url;

/// Normalized property record produced from a listing page.
///
/// Every field is best-effort and defaults to an empty string or list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct ExtractedProperty {
    pub title: String,
    /// Street, locality and region joined with `", "` when structured
    pub address: String,
    pub description: String,
    /// Digits only, no currency symbol or separators
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    /// Whole square metres
    pub size: String,
    /// One of the [`PropertyType`] labels, or empty
    #[serde(rename = "type")]
    pub property_type: String,
    /// Absolute URLs in discovery order, at most 20
    pub images: Vec<String>,
    /// [`Feature`] labels in table order
    pub features: Vec<String>,
    /// Canonical YouTube or Vimeo URL
    pub video_url: String,
}

/// The contribution of a single strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PartialProperty {
    pub title: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub size: Option<String>,
    pub property_type: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub video_url: Option<String>,
}

/// Input shared by all strategies.
pub(crate) struct Page<'a> {
    pub html: &'a str,
    pub document: Html,
    /// `None` when the page URL is not an absolute URL; relative links are then dropped.
    pub base_url: Option<Url>,
}

impl<'a> Page<'a> {
    pub fn new(html: &'a str, page_url: &str) -> Self {
        Page {
            html,
            document: Html::parse_document(html),
            base_url: Url::parse(page_url).ok(),
        }
    }
}

/// A strategy sees the page and the record merged so far.
type Strategy = fn(&Page<'_>, &ExtractedProperty) -> PartialProperty;

/// Strategies in priority order. Earlier entries win scalar fields.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("open_graph", meta::open_graph),
    ("json_ld", structured::json_ld),
    ("heuristics", heuristics::heuristics),
    ("property_type", classify::property_type),
    ("markup_images", images::markup_images),
    ("features", features::features),
    ("video", video::video),
];

/// Extracts a property record from a listing page.
///
/// `page_url` is the address the HTML was fetched from; it is only used to
/// resolve relative image URLs. This function never panics on malformed input.
///
/// # Example
///
/// ```
/// use listing_import::extract;
///
/// let html = r#"<meta property="og:title" content="3 Bed House in Durbanville">
///               <p>Asking R 2,450,000. Double garage and borehole.</p>"#;
/// let property = extract(html, "https://listings.example/p/1");
/// assert_eq!(property.title, "3 Bed House in Durbanville");
/// assert_eq!(property.price, "2450000");
/// assert_eq!(property.property_type, "House");
/// assert_eq!(property.features, vec!["Garage", "Borehole"]);
/// ```
pub fn extract(html: &str, page_url: &str) -> ExtractedProperty {
    let page = Page::new(html, page_url);
    let mut property = ExtractedProperty::default();

    for (name, strategy) in STRATEGIES {
        let partial = strategy(&page, &property);
        let filled = property.merge(partial);
        if !filled.is_empty() {
            debug!("Strategy {} filled: {}", name, filled.join(", "));
        }
    }

    property
}

impl ExtractedProperty {
    /// Applies a strategy's output: empty scalars are filled, lists gain unseen entries.
    /// Images stop accumulating at [`MAX_IMAGES`].
    ///
    /// Returns the names of the fields that changed.
    pub(crate) fn merge(&mut self, partial: PartialProperty) -> Vec<&'static str> {
        let mut filled = Vec::new();
        let scalars = [
            ("title", &mut self.title, partial.title),
            ("address", &mut self.address, partial.address),
            ("description", &mut self.description, partial.description),
            ("price", &mut self.price, partial.price),
            ("bedrooms", &mut self.bedrooms, partial.bedrooms),
            ("bathrooms", &mut self.bathrooms, partial.bathrooms),
            ("size", &mut self.size, partial.size),
            ("type", &mut self.property_type, partial.property_type),
            ("videoUrl", &mut self.video_url, partial.video_url),
        ];
        for (name, slot, candidate) in scalars {
            if fill(slot, candidate) {
                filled.push(name);
            }
        }
        if append_unique(&mut self.images, partial.images, MAX_IMAGES) > 0 {
            filled.push("images");
        }
        if append_unique(&mut self.features, partial.features, usize::MAX) > 0 {
            filled.push("features");
        }
        filled
    }
}

fn fill(slot: &mut String, candidate: Option<String>) -> bool {
    match candidate {
        Some(value) if slot.is_empty() && !value.trim().is_empty() => {
            *slot = value;
            true
        }
        _ => false,
    }
}

/// Appends unseen items until `list` holds `limit` entries.
fn append_unique(list: &mut Vec<String>, items: Vec<String>, limit: usize) -> usize {
    let mut added = 0;
    for item in items {
        if list.len() >= limit {
            break;
        }
        if !list.contains(&item) {
            list.push(item);
            added += 1;
        }
    }
    added
}
