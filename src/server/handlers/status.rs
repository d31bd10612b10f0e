//! JSON status handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, ImportCounts, StatusResponse};
use crate::error_handling::ImportOutcome;

/// Import counters since the server started
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;
    let response = StatusResponse {
        elapsed_seconds: state.start_time.elapsed().as_secs_f64(),
        imports: ImportCounts {
            total: stats.total(),
            succeeded: stats.get(ImportOutcome::Succeeded),
            failed: stats.total_failures(),
            rejected: stats.get(ImportOutcome::Rejected),
            upstream_status: stats.get(ImportOutcome::UpstreamStatus),
            timeout: stats.get(ImportOutcome::Timeout),
            fetch_failed: stats.get(ImportOutcome::FetchFailed),
            extract_failed: stats.get(ImportOutcome::ExtractFailed),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
