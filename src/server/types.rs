//! Server state and response bodies.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::error_handling::{ImportStats, InitializationError};
use crate::initialization::init_client;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client used for the outbound page fetch
    pub client: Arc<reqwest::Client>,
    /// Limits applied to each import
    pub config: Arc<Config>,
    /// Per-outcome counters reported by `/status`
    pub stats: Arc<ImportStats>,
    pub(crate) start_time: Arc<Instant>,
}

impl AppState {
    /// Builds the state for `config`, including its HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
            stats: Arc::new(ImportStats::new()),
            start_time: Arc::new(Instant::now()),
        })
    }
}

/// JSON response for `/status` endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub elapsed_seconds: f64,
    pub imports: ImportCounts,
}

#[derive(Debug, Serialize)]
pub struct ImportCounts {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub rejected: usize,
    pub upstream_status: usize,
    pub timeout: usize,
    pub fetch_failed: usize,
    pub extract_failed: usize,
}
