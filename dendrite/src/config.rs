//! Dispatch round configuration.

use dendrite_core::{CallTimeout, RouterError};
use serde::{Deserialize, Serialize};

/// Default per-call timeout.
pub const DEFAULT_CALL_TIMEOUT: CallTimeout = CallTimeout::from_millis(3_000);

/// Default ceiling on concurrently executing calls.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 32;

/// Configuration for the dispatcher and aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DendriteConfig {
    /// Expected dimension of every peer response and of the aggregate.
    /// A response with any other shape is treated as malformed.
    pub response_dim: usize,

    /// Per-call timeout, covering queueing for an in-flight slot and the
    /// call itself. No retries happen at this layer.
    pub call_timeout: CallTimeout,

    /// Maximum calls executing at once across the whole round.
    pub max_in_flight: usize,
}

impl DendriteConfig {
    /// Configuration with defaults for everything but the response shape.
    pub fn new(response_dim: usize) -> Self {
        Self {
            response_dim,
            call_timeout: DEFAULT_CALL_TIMEOUT,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    /// Validate the configuration. Like routing config, this is the only
    /// point of failure — rounds themselves never error.
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.response_dim == 0 {
            return Err(RouterError::InvalidResponseDim { got: 0 });
        }
        if self.max_in_flight == 0 {
            return Err(RouterError::InvalidMaxInFlight { got: 0 });
        }
        Ok(())
    }
}
