//! Video tour link detection.

use regex::Regex;
use std::sync::LazyLock;

use super::{ExtractedProperty, Page, PartialProperty};
use crate::utils::compile_regex_unsafe;

// Host and path are case-insensitive; video IDs are not
const YOUTUBE_PATTERN: &str =
    r"(?i:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{6,})";
const VIMEO_PATTERN: &str = r"(?i:vimeo\.com/(?:video/)?)(\d+)";

static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(YOUTUBE_PATTERN, "YOUTUBE_RE"));
static VIMEO_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(VIMEO_PATTERN, "VIMEO_RE"));

/// Canonical video URL for the first YouTube link, or failing that the first Vimeo link.
pub(super) fn find_video_url(html: &str) -> Option<String> {
    if let Some(id) = YOUTUBE_RE.captures(html).and_then(|caps| caps.get(1)) {
        return Some(format!("https://www.youtube.com/watch?v={}", id.as_str()));
    }
    VIMEO_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("https://vimeo.com/{}", id.as_str()))
}

pub(super) fn video(page: &Page<'_>, _merged: &ExtractedProperty) -> PartialProperty {
    PartialProperty {
        video_url: find_video_url(page.html),
        ..Default::default()
    }
}
