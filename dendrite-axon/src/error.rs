//! Inbound error types and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dendrite_core::PeerKey;
use dendrite_wire::WireError;
use serde::Serialize;
use thiserror::Error;

/// Convenience alias for inbound results.
pub type Result<T> = std::result::Result<T, AxonError>;

/// Failure to serve one inbound forward call.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AxonError {
    /// The request body did not decode to an envelope or payload.
    #[error("bad envelope: {0}")]
    Decode(#[from] WireError),

    /// The envelope is addressed to a different identity.
    #[error("wrong target: addressed to {got}, this node is {expected}")]
    WrongTarget {
        /// This node's identity.
        expected: PeerKey,
        /// Identity on the envelope.
        got: PeerKey,
    },

    /// The injected handler could not produce response features.
    #[error("handler failed: {0}")]
    Handler(String),
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl IntoResponse for AxonError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AxonError::Decode(_) => (StatusCode::BAD_REQUEST, "BAD_ENVELOPE"),
            AxonError::WrongTarget { .. } => (StatusCode::BAD_REQUEST, "WRONG_TARGET"),
            AxonError::Handler(_) => (StatusCode::INTERNAL_SERVER_ERROR, "HANDLER_FAILED"),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
