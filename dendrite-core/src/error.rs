//! Error taxonomy for the query layer.

use crate::timeout::CallTimeout;
use thiserror::Error;

/// Malformed routing/dispatch configuration.
///
/// These are the only errors that propagate to callers as hard failures,
/// and they surface at construction time — never during a round.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RouterError {
    /// Top-k of zero selects nothing and is always a configuration mistake.
    #[error("top_k must be at least 1, got {got}")]
    InvalidTopK {
        /// The rejected value.
        got: usize,
    },

    /// An in-flight ceiling of zero would deadlock every round.
    #[error("max_in_flight must be at least 1, got {got}")]
    InvalidMaxInFlight {
        /// The rejected value.
        got: usize,
    },

    /// A response dimension of zero leaves nothing to aggregate.
    #[error("response_dim must be at least 1, got {got}")]
    InvalidResponseDim {
        /// The rejected value.
        got: usize,
    },
}

/// Failure of one transport call.
///
/// Recovered locally as [`CallOutcome::Failed`](crate::CallOutcome::Failed)
/// at the dispatcher boundary — callers of a round never see these. The
/// variants exist so logs can distinguish a timeout from a refused
/// connection from a corrupt payload.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the peer (refused, DNS, reset).
    #[error("connect failed: {0}")]
    Connect(String),

    /// The call exceeded its configured timeout.
    #[error("timed out after {0}")]
    Timeout(CallTimeout),

    /// The peer answered with a non-success status.
    #[error("peer returned status {code}: {body}")]
    Status {
        /// HTTP-level status code.
        code: u16,
        /// Response body, for logs.
        body: String,
    },

    /// The response bytes did not decode to a usable payload.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The enclosing round was cancelled before the call completed.
    #[error("round cancelled")]
    Cancelled,

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Whether this failure was a timeout (for log classification only).
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::Connect("refused".into()).to_string(),
            "connect failed: refused"
        );
        assert_eq!(
            TransportError::Timeout(CallTimeout::from_millis(500)).to_string(),
            "timed out after 500ms"
        );
        assert_eq!(
            TransportError::Status { code: 503, body: "overloaded".into() }.to_string(),
            "peer returned status 503: overloaded"
        );
    }

    #[test]
    fn only_timeouts_classify_as_timeout() {
        assert!(TransportError::Timeout(CallTimeout::ZERO).is_timeout());
        assert!(!TransportError::Connect("x".into()).is_timeout());
        assert!(!TransportError::Cancelled.is_timeout());
    }
}
