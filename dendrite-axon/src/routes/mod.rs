//! Route definitions for the inbound surface.

mod forward;
mod health;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;

/// Build the router: one forward operation plus a health probe. Nothing
/// else is part of this subsystem's wire contract.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/forward", post(forward::forward))
        .route("/v1/health", get(health::health))
        .with_state(state)
}
