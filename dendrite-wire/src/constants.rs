//! Wire format constants.

/// Envelope magic bytes: "DNDW".
pub const MAGIC: [u8; 4] = [0x44, 0x4E, 0x44, 0x57];

/// Wire protocol version (v1).
pub const PROTOCOL_VERSION: u16 = 0x0001;

/// Nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Fixed envelope header length: magic(4) + version(2) + caller(32) +
/// target(32) + nonce(12) + payload_len(4) + payload_crc(4).
pub const ENVELOPE_HEADER_LEN: usize = 90;
