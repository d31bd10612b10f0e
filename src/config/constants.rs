//! Configuration constants.
//!
//! This module defines the defaults and fixed limits used throughout the
//! importer: network timeouts, body size caps, and extraction limits.

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default per-request timeout for the outbound page fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for the outbound page fetch.
///
/// Listing sites see a static, identifying agent rather than a browser
/// impersonation. Override with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "listing_import/",
    env!("CARGO_PKG_VERSION"),
    " (+property import)"
);

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Bodies larger than this are truncated before extraction
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum accepted URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Extraction limits
/// Maximum number of image URLs kept on an extracted property
pub const MAX_IMAGES: usize = 20;
/// Minimum number of digits a heuristic price candidate must have
pub const MIN_PRICE_DIGITS: usize = 4;

/// Maximum HTML preview length in characters for debug logging
pub const MAX_HTML_PREVIEW_CHARS: usize = 200;
