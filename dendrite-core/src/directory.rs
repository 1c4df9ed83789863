//! The Directory boundary: who is reachable right now.

use crate::peer::Peer;
use async_trait::async_trait;

/// Read-only source of the current peer set.
///
/// Membership, discovery, and liveness tracking live behind this trait;
/// the query layer takes one snapshot per round and never writes back.
/// The snapshot may change between rounds but is stable within one.
#[async_trait]
pub trait Directory: Send + Sync {
    /// The peers reachable at this moment, in the directory's canonical
    /// order. Index positions in a round's diagnostics refer to the
    /// snapshot this returned.
    async fn current_peers(&self) -> Vec<Peer>;
}
