//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::ClientBuilder;

use crate::config::{Config, ACCEPT_HTML, NO_CACHE};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch listing pages.
///
/// Creates a `reqwest::Client` configured with:
/// - the static identifying User-Agent from the config
/// - `Accept: text/html,application/xhtml+xml`
/// - `Cache-Control: no-cache` and `Pragma: no-cache` on every request
/// - the per-request timeout from the config
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    headers.insert(PRAGMA, HeaderValue::from_static(NO_CACHE));

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(Arc::new(client))
}
