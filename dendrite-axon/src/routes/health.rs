//! Health probe.

use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

/// Health response body.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers.
    pub status: &'static str,
    /// This node's identity, hex.
    pub key: String,
}

/// GET /v1/health — liveness plus the node identity for directory checks.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        key: state.local_key.to_hex(),
    })
}
