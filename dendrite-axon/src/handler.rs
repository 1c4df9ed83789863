//! The injected feature computation behind the forward surface.

use async_trait::async_trait;
use dendrite_core::{FeatureVec, PeerKey};

/// Handler error: anything the model wants to report upward.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Computes response features for one decoded inbound query.
///
/// This is the model's seat at the table. The surface decodes, checks
/// addressing, and re-encodes; everything between is this trait.
#[async_trait]
pub trait ForwardHandler: Send + Sync {
    /// Produce response features for `query` sent by `caller`.
    async fn forward(&self, caller: PeerKey, query: FeatureVec)
        -> Result<FeatureVec, HandlerError>;
}

/// Returns the query as the response.
///
/// Stands in for a model when wiring up a mesh or running transport
/// smoke tests.
pub struct EchoHandler;

#[async_trait]
impl ForwardHandler for EchoHandler {
    async fn forward(
        &self,
        _caller: PeerKey,
        query: FeatureVec,
    ) -> Result<FeatureVec, HandlerError> {
        Ok(query)
    }
}
