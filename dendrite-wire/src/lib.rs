//! Wire format for the dendrite forward operation.
//!
//! One message shape travels in both directions: an [`Envelope`] carrying
//! caller and target identities, a fresh per-call nonce, and one
//! CRC-protected feature payload. Layout is little-endian and bit-exact;
//! any missing or corrupt field is a [`WireError`], never a panic.

pub mod constants;
pub mod envelope;
pub mod error;
pub mod payload;

pub use constants::{MAGIC, NONCE_LEN, PROTOCOL_VERSION};
pub use envelope::{fresh_nonce, Envelope, Nonce};
pub use error::WireError;
pub use payload::{decode_features, encode_features};
