//! Feature keyword detection.

use regex::Regex;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::{ExtractedProperty, Page, PartialProperty};
use crate::utils::compile_regex_unsafe;

/// Listing features recognised from free text, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[allow(missing_docs)]
pub enum Feature {
    Parking,
    Garden,
    Security,
    #[strum(to_string = "Pet Friendly")]
    PetFriendly,
    Pool,
    Garage,
    Borehole,
    Solar,
    Fibre,
}

impl Feature {
    /// Case-insensitive pattern that signals this feature.
    pub fn pattern(&self) -> &'static str {
        match self {
            Feature::Parking => "parking",
            Feature::Garden => "garden|braai|paved",
            Feature::Security => "security|alarm|electric fence|gated",
            Feature::PetFriendly => "pet-friendly|pets allowed",
            Feature::Pool => "pool",
            Feature::Garage => "garage",
            Feature::Borehole => "borehole",
            Feature::Solar => "solar",
            Feature::Fibre => "fibre",
        }
    }

    /// Every feature mentioned in `text`, once each, in declaration order.
    pub fn detect(text: &str) -> Vec<Feature> {
        FEATURE_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(feature, _)| *feature)
            .collect()
    }
}

static FEATURE_PATTERNS: LazyLock<Vec<(Feature, Regex)>> = LazyLock::new(|| {
    Feature::iter()
        .map(|f| {
            let pattern = format!("(?i){}", f.pattern());
            (f, compile_regex_unsafe(&pattern, "FEATURE_PATTERNS"))
        })
        .collect()
});

/// Scans the description merged so far, or the whole page when there is none.
pub(super) fn features(page: &Page<'_>, merged: &ExtractedProperty) -> PartialProperty {
    let haystack = if merged.description.trim().is_empty() {
        page.html
    } else {
        merged.description.as_str()
    };
    PartialProperty {
        features: Feature::detect(haystack)
            .into_iter()
            .map(|f| f.to_string())
            .collect(),
        ..Default::default()
    }
}
