//! Listing import handler.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info, warn};
use serde_json::Value;

use super::super::types::AppState;
use crate::error_handling::{ImportError, ImportOutcome};
use crate::extract::{extract, ExtractedProperty};
use crate::fetch::{fetch_page, validate_import_url};

/// `POST /api/property/import-from-url` with body `{ "url": "..." }`
///
/// The body is taken as raw bytes so that malformed JSON gets the same
/// `{ "error": ... }` shape as every other failure.
pub async fn import_handler(State(state): State<AppState>, body: Bytes) -> Response {
    match import(&state, &body).await {
        Ok(property) => {
            state.stats.record(ImportOutcome::Succeeded);
            Json(property).into_response()
        }
        Err(e) => {
            state.stats.record(e.outcome());
            match &e {
                ImportError::Fetch(source) => error!("Import failed: {source}"),
                ImportError::Extraction(source) => error!("Extraction task failed: {source}"),
                ImportError::UpstreamStatus(code) => warn!("Listing site returned {code}"),
                other => info!("Rejected import request: {other}"),
            }
            e.into_response()
        }
    }
}

async fn import(state: &AppState, body: &[u8]) -> Result<ExtractedProperty, ImportError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| ImportError::InvalidBody)?;
    let url = validate_import_url(payload.get("url").and_then(Value::as_str))?;

    let html = fetch_page(&state.client, &url, state.config.max_body_bytes).await?;
    // CPU-bound; runs on the blocking pool
    let page_url = url.clone();
    let property = tokio::task::spawn_blocking(move || extract(&html, page_url.as_str()))
        .await
        .map_err(ImportError::Extraction)?;
    info!(
        "Imported {}: title={:?}, price={:?}, {} image(s)",
        url,
        property.title,
        property.price,
        property.images.len()
    );
    Ok(property)
}
