//! HTTP API.
//!
//! Provides two endpoints:
//! - `POST /api/property/import-from-url` - fetch a listing page and return the extracted property
//! - `GET /status` - JSON import counters

mod handlers;
mod types;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use handlers::{import_handler, status_handler};
pub use types::AppState;

/// Path of the import endpoint.
pub const IMPORT_PATH: &str = "/api/property/import-from-url";

/// Builds the router over existing state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(IMPORT_PATH, post(import_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// Binds `config.bind_addr` and serves the API until the process stops.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the address cannot be
/// bound, or the server fails while running.
pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let bind_addr = config.bind_addr;
    let state = AppState::new(config).context("Failed to initialize HTTP client")?;

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind server to {bind_addr}"))?;

    log::info!("Listening on http://{}/", bind_addr);
    log::info!("  - Import: POST http://{}{}", bind_addr, IMPORT_PATH);
    log::info!("  - Status: GET http://{}/status", bind_addr);

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}
