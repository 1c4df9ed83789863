//! The Transport boundary.

use crate::error::TransportError;
use crate::features::FeatureVec;
use crate::peer::Peer;
use async_trait::async_trait;

/// One point-to-point call to one peer.
///
/// Implementations own the wire envelope, serialization, and connection
/// handling. A call is synchronous from the caller's perspective: features
/// in, features out, or a single classified error. Retrying is a policy
/// decision that belongs to callers, not implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `features` to `peer` and await its response features.
    async fn call(&self, peer: &Peer, features: &FeatureVec)
        -> Result<FeatureVec, TransportError>;
}
