//! Shared application state.

use crate::handler::ForwardHandler;
use dendrite_core::PeerKey;
use std::sync::Arc;

/// State shared across inbound requests.
#[derive(Clone)]
pub struct AppState {
    /// This node's public identity; envelopes must be addressed to it.
    pub local_key: PeerKey,
    /// The injected feature computation.
    pub handler: Arc<dyn ForwardHandler>,
}

impl AppState {
    /// Create state for a node identity and handler.
    pub fn new(local_key: PeerKey, handler: Arc<dyn ForwardHandler>) -> Self {
        Self { local_key, handler }
    }
}
