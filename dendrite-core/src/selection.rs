//! Router output: which peers to query per item, and at what weight.

use crate::peer::PeerKey;
use serde::{Deserialize, Serialize};

/// One (peer, weight) choice for one input item.
///
/// `peer_index` points into the round's peer snapshot; `peer` carries the
/// identity so attribution holds even if a caller re-derives the snapshot.
/// Weights are non-negative and conventionally (not necessarily) sum to 1
/// over the selections of one item. Selections for an item are ordered by
/// weight descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Index of the peer within the round snapshot.
    pub peer_index: usize,
    /// Identity of the selected peer.
    pub peer: PeerKey,
    /// Mixture weight assigned by the routing policy, ≥ 0.
    pub weight: f32,
}
