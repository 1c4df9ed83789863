//! Feature array payload codec.
//!
//! Layout: element count `u32` LE, then that many `f32` LE values. The pair
//! [`encode_features`] / [`decode_features`] round-trips bit-exactly for
//! every dimension, including zero.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use dendrite_core::FeatureVec;
use std::io::Cursor;

use crate::error::{Result, WireError};

/// Encode a feature array to payload bytes.
pub fn encode_features(features: &FeatureVec) -> Vec<u8> {
    let values = features.as_slice();
    let mut buf = Vec::with_capacity(4 + 4 * values.len());
    buf.write_u32::<LittleEndian>(values.len() as u32).unwrap();
    for &v in values {
        buf.write_f32::<LittleEndian>(v).unwrap();
    }
    buf
}

/// Decode payload bytes back to a feature array.
pub fn decode_features(data: &[u8]) -> Result<FeatureVec> {
    if data.len() < 4 {
        return Err(WireError::BufferTooShort {
            need: 4,
            have: data.len(),
        });
    }

    let mut cursor = Cursor::new(data);
    let dim = cursor.read_u32::<LittleEndian>()? as usize;

    let need = 4usize + dim.saturating_mul(4);
    if data.len() != need {
        return Err(WireError::PayloadLengthMismatch {
            dim,
            need,
            have: data.len(),
        });
    }

    let mut values = Vec::with_capacity(dim);
    for _ in 0..dim {
        values.push(cursor.read_f32::<LittleEndian>()?);
    }
    Ok(FeatureVec::new(values))
}
