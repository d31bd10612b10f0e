//! Listing page download.

use log::debug;
use url::Url;

use crate::config::MAX_HTML_PREVIEW_CHARS;
use crate::error_handling::ImportError;
use crate::utils::text::preview;

/// Downloads a listing page and returns its body as text.
///
/// Redirects are followed by the client. At most `max_body_bytes` bytes of
/// the body are read; anything past the cap is discarded and extraction runs
/// on the prefix. Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// - `UpstreamStatus` if the final response is not 2xx
/// - `Fetch` on connection failures, timeouts, or errors while reading the body
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &Url,
    max_body_bytes: usize,
) -> Result<String, ImportError> {
    let mut response = client
        .get(url.clone())
        .send()
        .await
        .map_err(ImportError::Fetch)?;

    let status = response.status();
    debug!("Fetched {} -> {} ({})", url, response.url(), status);
    if !status.is_success() {
        return Err(ImportError::UpstreamStatus(status.as_u16()));
    }

    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(ImportError::Fetch)? {
        let room = max_body_bytes.saturating_sub(body.len());
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            debug!("Truncated body of {} at {} bytes", url, max_body_bytes);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    let html = String::from_utf8_lossy(&body).into_owned();
    debug!("Body length for {}: {} bytes", url, html.len());
    log::trace!(
        "HTML preview (first {} chars) for {}: {}",
        MAX_HTML_PREVIEW_CHARS,
        url,
        preview(&html, MAX_HTML_PREVIEW_CHARS)
    );
    Ok(html)
}
