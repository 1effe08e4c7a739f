//! Compressed point encoding.
//!
//! Points travel between organizations and the auditor only in their
//! canonical 32-byte compressed form; decoding is the one place where
//! untrusted bytes enter the group.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};

use crate::error::CurveError;

/// Length of a compressed edwards25519 point encoding.
pub const POINT_LEN: usize = 32;

/// Compress a point to its canonical 32-byte encoding.
///
/// The identity element encodes as `0x01` followed by 31 zero bytes.
pub fn encode_point(point: &EdwardsPoint) -> [u8; POINT_LEN] {
    point.compress().to_bytes()
}

/// Decode a 32-byte compressed encoding back to a point.
pub fn decode_point(bytes: &[u8; POINT_LEN]) -> Result<EdwardsPoint, CurveError> {
    CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or(CurveError::MalformedPoint)
}
