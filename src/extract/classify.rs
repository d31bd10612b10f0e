//! Property type inference.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::{ExtractedProperty, Page, PartialProperty};

/// Property types an import can be classified as, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[allow(missing_docs)]
pub enum PropertyType {
    Apartment,
    Townhouse,
    Duplex,
    House,
}

impl PropertyType {
    /// Lower-case substrings that select this type.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            PropertyType::Apartment => &["apartment", "flat"],
            PropertyType::Townhouse => &["townhouse", "town house"],
            PropertyType::Duplex => &["duplex"],
            PropertyType::House => &["house", "home"],
        }
    }

    /// First type, in declaration order, with a keyword anywhere in `text`.
    pub fn infer(text: &str) -> Option<PropertyType> {
        let lowered = text.to_lowercase();
        PropertyType::iter().find(|t| t.keywords().iter().any(|k| lowered.contains(k)))
    }
}

pub(super) fn property_type(page: &Page<'_>, merged: &ExtractedProperty) -> PartialProperty {
    if !merged.property_type.is_empty() {
        return PartialProperty::default();
    }
    PartialProperty {
        property_type: PropertyType::infer(page.html).map(|t| t.to_string()),
        ..Default::default()
    }
}
