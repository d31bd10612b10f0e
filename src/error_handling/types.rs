//! Error type definitions.
//!
//! This module defines the error and outcome types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;
use tokio::task::JoinError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures of a single listing import.
///
/// The `Display` text of each variant is the message returned to API callers,
/// so it must not leak internals. Transport details stay in the logs.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Request body was not JSON.
    #[error("Invalid JSON body")]
    InvalidBody,

    /// `url` was missing, blank, or not a string.
    #[error("URL is required")]
    MissingUrl,

    /// `url` could not be parsed, or exceeded the maximum length.
    #[error("Invalid URL")]
    InvalidUrl,

    /// `url` used a scheme other than http or https.
    #[error("URL must be http or https")]
    UnsupportedScheme,

    /// The listing site answered with a non-2xx status.
    #[error("Could not fetch page ({0})")]
    UpstreamStatus(u16),

    /// Network failure while fetching or reading the page.
    #[error("Failed to import property from URL")]
    Fetch(#[source] ReqwestError),

    /// The blocking extraction task panicked or was cancelled.
    #[error("Failed to import property from URL")]
    Extraction(#[source] JoinError),
}

impl ImportError {
    /// HTTP status code reported to API callers for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ImportError::InvalidBody
            | ImportError::MissingUrl
            | ImportError::InvalidUrl
            | ImportError::UnsupportedScheme => 400,
            ImportError::UpstreamStatus(_) => 422,
            ImportError::Fetch(_) | ImportError::Extraction(_) => 500,
        }
    }

    /// Outcome counter this error is recorded under.
    pub fn outcome(&self) -> ImportOutcome {
        match self {
            ImportError::InvalidBody
            | ImportError::MissingUrl
            | ImportError::InvalidUrl
            | ImportError::UnsupportedScheme => ImportOutcome::Rejected,
            ImportError::UpstreamStatus(_) => ImportOutcome::UpstreamStatus,
            ImportError::Fetch(ref e) if e.is_timeout() => ImportOutcome::Timeout,
            ImportError::Fetch(_) => ImportOutcome::FetchFailed,
            ImportError::Extraction(_) => ImportOutcome::ExtractFailed,
        }
    }
}

/// Outcomes of an import request, tracked by [`super::ImportStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ImportOutcome {
    /// Property extracted and returned.
    Succeeded,
    /// 400: bad body or URL.
    Rejected,
    /// 422: listing site returned non-2xx.
    UpstreamStatus,
    /// Page fetch exceeded the configured timeout.
    Timeout,
    /// Connect or body errors other than timeouts.
    FetchFailed,
    /// The extraction task did not complete.
    ExtractFailed,
}

impl std::fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ImportOutcome {
    /// Counter name used in `/status` and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportOutcome::Succeeded => "succeeded",
            ImportOutcome::Rejected => "rejected",
            ImportOutcome::UpstreamStatus => "upstream_status",
            ImportOutcome::Timeout => "timeout",
            ImportOutcome::FetchFailed => "fetch_failed",
            ImportOutcome::ExtractFailed => "extract_failed",
        }
    }
}
