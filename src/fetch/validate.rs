//! Import URL validation.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ImportError;

/// Validates the `url` field of an import request.
///
/// The value is trimmed first. Unlike batch scanning, no scheme is guessed:
/// the caller must send an absolute http(s) URL.
///
/// # Errors
///
/// - `MissingUrl` if the value is absent or blank
/// - `InvalidUrl` if it is longer than [`MAX_URL_LENGTH`] or does not parse
/// - `UnsupportedScheme` if the scheme is not http or https
///
/// # Examples
///
/// ```
/// use listing_import::{validate_import_url, ImportError};
///
/// let url = validate_import_url(Some(" https://x.test/listing/1 ")).unwrap();
/// assert_eq!(url.as_str(), "https://x.test/listing/1");
/// assert!(matches!(validate_import_url(Some("ftp://x")), Err(ImportError::UnsupportedScheme)));
/// ```
pub fn validate_import_url(raw: Option<&str>) -> Result<Url, ImportError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ImportError::MissingUrl);
    }

    if raw.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            raw.len(),
            MAX_URL_LENGTH,
            raw.chars().take(50).collect::<String>()
        );
        return Err(ImportError::InvalidUrl);
    }

    let parsed = Url::parse(raw).map_err(|e| {
        warn!("Rejecting invalid URL {raw}: {e}");
        ImportError::InvalidUrl
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => {
            warn!("Rejecting unsupported scheme {other} for URL: {raw}");
            Err(ImportError::UnsupportedScheme)
        }
    }
}
