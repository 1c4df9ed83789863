//! StaticDirectory — a fixed peer list.

use crate::directory::Directory;
use crate::peer::Peer;
use async_trait::async_trait;

/// A directory that always returns the same snapshot.
/// Used for testing routing and dispatch without membership churn.
pub struct StaticDirectory {
    peers: Vec<Peer>,
}

impl StaticDirectory {
    /// Create a directory over a fixed peer list.
    pub fn new(peers: Vec<Peer>) -> Self {
        Self { peers }
    }
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn current_peers(&self) -> Vec<Peer> {
        self.peers.clone()
    }
}
