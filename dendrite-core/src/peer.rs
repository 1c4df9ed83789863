//! Peer identity and addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a peer identity key in bytes.
pub const PEER_KEY_LEN: usize = 32;

/// Opaque fixed-size peer identity.
///
/// Keys are compared byte-wise; the ordering is what makes selection
/// tie-breaks deterministic across runs. The layer attaches no meaning to
/// the bytes — key derivation belongs to the directory.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerKey([u8; PEER_KEY_LEN]);

impl PeerKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; PEER_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; PEER_KEY_LEN] {
        &self.0
    }

    /// Parse a key from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; PEER_KEY_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Full hex rendering of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PeerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerKey({})", self)
    }
}

/// Keys render truncated in logs; use [`PeerKey::to_hex`] for the full form.
impl fmt::Display for PeerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}…", hex::encode(&self.0[..6]))
    }
}

/// Network address of a peer: host and port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerAddr {
    /// Hostname or IP literal.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl PeerAddr {
    /// Create an address from host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Liveness status as reported by the directory.
///
/// The query layer only reads this; maintaining it is the directory's job.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerStatus {
    /// Reachable at last directory refresh.
    Active,
    /// Known but not currently reachable.
    Unreachable,
}

/// A network-addressable participant.
///
/// One snapshot of peers is taken at round start and stays read-only for
/// the duration of the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    /// Unique identity key.
    pub key: PeerKey,
    /// Network address.
    pub addr: PeerAddr,
    /// Directory-maintained liveness status.
    pub status: PeerStatus,
}

impl Peer {
    /// Create an active peer.
    pub fn new(key: PeerKey, addr: PeerAddr) -> Self {
        Self {
            key,
            addr,
            status: PeerStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_hex_roundtrip() {
        let key = PeerKey::from_bytes([0xAB; PEER_KEY_LEN]);
        let parsed = PeerKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn key_rejects_short_hex() {
        assert!(PeerKey::from_hex("abcd").is_err());
    }

    #[test]
    fn key_ordering_is_bytewise() {
        let a = PeerKey::from_bytes([1; PEER_KEY_LEN]);
        let b = PeerKey::from_bytes([2; PEER_KEY_LEN]);
        assert!(a < b);
    }

    #[test]
    fn display_is_truncated() {
        let key = PeerKey::from_bytes([0xFF; PEER_KEY_LEN]);
        assert_eq!(key.to_string(), "ffffffffffff…");
    }

    #[test]
    fn addr_display() {
        assert_eq!(PeerAddr::new("10.0.0.7", 8091).to_string(), "10.0.0.7:8091");
    }
}
