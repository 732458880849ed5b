//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Database round trip (200 or 503)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage health.
///
/// Runs a trivial query against the database.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.health.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "healthy": true })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
