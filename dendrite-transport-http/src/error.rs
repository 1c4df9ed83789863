//! Internal helpers mapping HTTP failures to [`TransportError`].

use dendrite_core::{CallTimeout, TransportError};
use dendrite_wire::WireError;

/// Map a [`reqwest::Error`] to a [`TransportError`].
///
/// The dispatcher enforces the real per-call deadline; a reqwest-level
/// timeout only fires when the caller configured one on the client, and
/// its duration is not recoverable from the error.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(CallTimeout::ZERO)
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(Box::new(err))
    }
}

/// Map a non-success HTTP status to a [`TransportError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> TransportError {
    TransportError::Status {
        code: status.as_u16(),
        body: body.to_string(),
    }
}

/// Map a wire decode failure to a [`TransportError`].
///
/// Decode failures are per-call data, never a crash.
pub(crate) fn map_wire_error(err: WireError) -> TransportError {
    TransportError::Malformed(err.to_string())
}
