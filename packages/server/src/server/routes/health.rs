use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::domains::access::LedgerStats;
use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ledger: Option<LedgerStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Returns 200 OK with `{status, ledger: {pending, approved}}` if the ledger
/// answers, 503 Service Unavailable with the error otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.deps.ledger.stats().await {
        Ok(counts) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                ledger: Some(counts),
                error: None,
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                ledger: None,
                error: Some(e.to_string()),
            }),
        ),
    }
}
