//! The envelope exchanged by the forward operation.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use dendrite_core::{PeerKey, PEER_KEY_LEN};
use rand::RngCore;
use std::io::{Cursor, Read, Write};

use crate::constants::{ENVELOPE_HEADER_LEN, MAGIC, NONCE_LEN, PROTOCOL_VERSION};
use crate::error::{Result, WireError};

/// Per-call correlation token.
///
/// Fresh for every call. Advisory only — uniqueness is not enforced and it
/// is not a security control; it exists so both ends can correlate logs.
pub type Nonce = [u8; NONCE_LEN];

/// Generate a fresh random nonce.
pub fn fresh_nonce() -> Nonce {
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    nonce
}

/// One forward message: request and response share this shape.
///
/// The version travels on the wire but not in this struct — decoding
/// rejects anything but [`PROTOCOL_VERSION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Public identity of the sender.
    pub caller: PeerKey,
    /// Identity the message is addressed to.
    pub target: PeerKey,
    /// Per-call correlation token.
    pub nonce: Nonce,
    /// Codec-encoded feature array.
    pub payload: Vec<u8>,
}

impl Envelope {
    /// Create an envelope with a fresh nonce.
    pub fn new(caller: PeerKey, target: PeerKey, payload: Vec<u8>) -> Self {
        Self {
            caller,
            target,
            nonce: fresh_nonce(),
            payload,
        }
    }

    /// Encode to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let payload_crc = crc32fast::hash(&self.payload);

        let mut buf = Vec::with_capacity(ENVELOPE_HEADER_LEN + self.payload.len());
        buf.write_all(&MAGIC).unwrap();
        buf.write_u16::<LittleEndian>(PROTOCOL_VERSION).unwrap();
        buf.write_all(self.caller.as_bytes()).unwrap();
        buf.write_all(self.target.as_bytes()).unwrap();
        buf.write_all(&self.nonce).unwrap();
        buf.write_u32::<LittleEndian>(self.payload.len() as u32)
            .unwrap();
        buf.write_u32::<LittleEndian>(payload_crc).unwrap();
        buf.write_all(&self.payload).unwrap();
        buf
    }

    /// Decode from wire bytes, verifying magic, version, and payload CRC.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < ENVELOPE_HEADER_LEN {
            return Err(WireError::BufferTooShort {
                need: ENVELOPE_HEADER_LEN,
                have: data.len(),
            });
        }

        let mut cursor = Cursor::new(data);

        let mut magic = [0u8; 4];
        cursor.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(WireError::InvalidMagic);
        }

        let version = cursor.read_u16::<LittleEndian>()?;
        if version != PROTOCOL_VERSION {
            return Err(WireError::VersionMismatch {
                expected: PROTOCOL_VERSION,
                got: version,
            });
        }

        let mut caller = [0u8; PEER_KEY_LEN];
        cursor.read_exact(&mut caller)?;
        let mut target = [0u8; PEER_KEY_LEN];
        cursor.read_exact(&mut target)?;
        let mut nonce = [0u8; NONCE_LEN];
        cursor.read_exact(&mut nonce)?;

        let payload_len = cursor.read_u32::<LittleEndian>()? as usize;
        let expected_crc = cursor.read_u32::<LittleEndian>()?;

        let need = ENVELOPE_HEADER_LEN + payload_len;
        if data.len() < need {
            return Err(WireError::BufferTooShort {
                need,
                have: data.len(),
            });
        }
        let payload = data[ENVELOPE_HEADER_LEN..need].to_vec();

        let got_crc = crc32fast::hash(&payload);
        if got_crc != expected_crc {
            return Err(WireError::PayloadCrcMismatch {
                expected: expected_crc,
                got: got_crc,
            });
        }

        Ok(Self {
            caller: PeerKey::from_bytes(caller),
            target: PeerKey::from_bytes(target),
            nonce,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: u8) -> PeerKey {
        PeerKey::from_bytes([tag; PEER_KEY_LEN])
    }

    #[test]
    fn roundtrip() {
        let env = Envelope::new(key(1), key(2), vec![9, 8, 7]);
        let decoded = Envelope::decode(&env.encode()).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn roundtrip_empty_payload() {
        let env = Envelope::new(key(1), key(2), vec![]);
        let decoded = Envelope::decode(&env.encode()).unwrap();
        assert_eq!(decoded.payload.len(), 0);
    }

    #[test]
    fn nonces_are_fresh_per_envelope() {
        let a = Envelope::new(key(1), key(2), vec![]);
        let b = Envelope::new(key(1), key(2), vec![]);
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn rejects_corrupt_magic() {
        let mut bytes = Envelope::new(key(1), key(2), vec![1]).encode();
        bytes[0] = 0xFF;
        assert!(matches!(
            Envelope::decode(&bytes),
            Err(WireError::InvalidMagic)
        ));
    }

    #[test]
    fn rejects_unknown_version() {
        let mut bytes = Envelope::new(key(1), key(2), vec![1]).encode();
        bytes[4] = 0x7F;
        assert!(matches!(
            Envelope::decode(&bytes),
            Err(WireError::VersionMismatch { got: 0x7F, .. })
        ));
    }

    #[test]
    fn rejects_corrupt_payload() {
        let mut bytes = Envelope::new(key(1), key(2), vec![1, 2, 3]).encode();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert!(matches!(
            Envelope::decode(&bytes),
            Err(WireError::PayloadCrcMismatch { .. })
        ));
    }

    #[test]
    fn rejects_truncation_anywhere() {
        let bytes = Envelope::new(key(1), key(2), vec![1, 2, 3]).encode();
        for cut in 0..bytes.len() {
            assert!(
                Envelope::decode(&bytes[..cut]).is_err(),
                "decode accepted a {cut}-byte prefix"
            );
        }
    }
}
