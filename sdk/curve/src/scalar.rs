//! Scalar derivation by uniform-bytes (wide) reduction.
//!
//! Every integer fed into the group is first spread into a 64-byte
//! buffer and reduced modulo the group order from there. The 512-bit
//! reduction width keeps the resulting scalars free of modulo bias.

use curve25519_dalek::scalar::Scalar;

/// Length of the uniform-bytes reduction input.
pub const WIDE_LEN: usize = 64;

/// Reduce 64 uniform bytes to a scalar modulo the group order.
pub fn wide_scalar(bytes: &[u8; WIDE_LEN]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(bytes)
}

/// Derive a scalar from an unsigned 64-bit value.
///
/// The value is written big-endian into the first 8 bytes of a zeroed
/// 64-byte buffer before reduction.
pub fn scalar_from_u64(value: u64) -> Scalar {
    let mut buf = [0u8; WIDE_LEN];
    buf[..8].copy_from_slice(&value.to_be_bytes());
    wide_scalar(&buf)
}

/// Derive a scalar from a 32-byte digest, zero-extended to the full
/// reduction width.
pub fn scalar_from_digest(digest: &[u8; 32]) -> Scalar {
    let mut buf = [0u8; WIDE_LEN];
    buf[..32].copy_from_slice(digest);
    wide_scalar(&buf)
}
