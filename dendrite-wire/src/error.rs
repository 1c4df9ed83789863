//! Wire decode errors.

use thiserror::Error;

/// Failure to decode wire bytes into an envelope or payload.
///
/// Transports map these to a failed call outcome; the inbound surface maps
/// them to an explicit failure status. They never surface as a crash.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WireError {
    /// Fewer bytes than the format requires at this position.
    #[error("buffer too short: need {need} bytes, have {have}")]
    BufferTooShort {
        /// Bytes required.
        need: usize,
        /// Bytes available.
        have: usize,
    },

    /// The leading magic bytes are not ours.
    #[error("invalid magic bytes")]
    InvalidMagic,

    /// The message speaks a different protocol version.
    #[error("version mismatch: expected {expected}, got {got}")]
    VersionMismatch {
        /// Version this build speaks.
        expected: u16,
        /// Version on the wire.
        got: u16,
    },

    /// The payload bytes do not match their checksum.
    #[error("payload CRC mismatch: expected 0x{expected:08X}, got 0x{got:08X}")]
    PayloadCrcMismatch {
        /// Checksum carried on the wire.
        expected: u32,
        /// Checksum of the received bytes.
        got: u32,
    },

    /// A feature payload whose byte length disagrees with its dimension.
    #[error("payload length mismatch: dim {dim} needs {need} bytes, have {have}")]
    PayloadLengthMismatch {
        /// Declared element count.
        dim: usize,
        /// Bytes the declared count requires.
        need: usize,
        /// Bytes present.
        have: usize,
    },

    /// Short read while decoding fixed-width fields.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for wire results.
pub type Result<T> = std::result::Result<T, WireError>;
