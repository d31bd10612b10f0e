//! HTTP header values for the outbound page fetch.

/// `Accept` header sent when fetching a listing page.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// `Cache-Control` / `Pragma` value that asks intermediaries not to serve a cached copy.
pub const NO_CACHE: &str = "no-cache";
