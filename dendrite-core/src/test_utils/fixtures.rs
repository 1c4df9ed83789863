//! Deterministic peer fixtures.

use crate::peer::{Peer, PeerAddr, PeerKey, PEER_KEY_LEN};

/// A peer whose key bytes are all `tag`, addressed at an unroutable port.
pub fn peer_with_key(tag: u8) -> Peer {
    Peer::new(
        PeerKey::from_bytes([tag; PEER_KEY_LEN]),
        PeerAddr::new("127.0.0.1", 9000 + tag as u16),
    )
}

/// `n` distinct peers with keys `1..=n`, in key order.
pub fn test_peers(n: u8) -> Vec<Peer> {
    (1..=n).map(peer_with_key).collect()
}
