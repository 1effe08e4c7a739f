//! Blinded amount commitments.
//!
//! ```text
//! Commit(amount, ts, counter) = amount_scalar * G  (+/-)  hash_scalar * H
//!
//! amount_scalar = wide_reduce(be64(|amount|)), negated for amount < 0
//! hash_scalar   = wide_reduce(SHA-256(be64(ts) || be64(counter)))
//! ```
//!
//! `G` and `H` are two bases with no known discrete-log relation,
//! supplied by the caller. The hash term binds the commitment to the
//! (timestamp, counter) pair; no independent random blinding is mixed
//! in, so hiding is only as strong as the unpredictability of that pair.
//! Callers relying on confidentiality must treat (timestamp, counter) as
//! the blinding factor and never reuse a pair across distinguishable
//! amounts.

use curve25519_dalek::edwards::EdwardsPoint;
use obscura_curve::{CurveError, POINT_LEN, decode_point, encode_point};
use obscura_curve::{scalar_from_digest, scalar_from_u64};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Length of a serialized commitment (one compressed point).
pub const COMMITMENT_LEN: usize = POINT_LEN;

/// A commitment to a signed amount, stored in compressed point form.
///
/// Serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "hex::serde")] pub [u8; COMMITMENT_LEN]);

impl Commitment {
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Compress a point into a commitment.
    pub fn encode(point: &EdwardsPoint) -> Self {
        Self(encode_point(point))
    }

    /// Decode back to a curve point.
    pub fn decode(&self) -> Result<EdwardsPoint, CurveError> {
        decode_point(&self.0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; COMMITMENT_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Commit to a signed amount under bases `g` and `h`.
///
/// Deterministic: the same inputs always yield the same commitment, with
/// no hidden randomness. With `negate_hash` set the `H`-component is
/// subtracted instead of added; note that this inverts only the blinding
/// term, so `commit(a, .., true)` is NOT the point negation of
/// `commit(a, .., false)`.
pub fn commit(
    amount: i64,
    timestamp: i64,
    counter: u64,
    g: &EdwardsPoint,
    h: &EdwardsPoint,
    negate_hash: bool,
) -> Commitment {
    // unsigned_abs keeps i64::MIN exact where naive negation would overflow
    commit_signed(
        amount.unsigned_abs(),
        amount < 0,
        timestamp,
        counter,
        g,
        h,
        negate_hash,
    )
}

/// Commitment over an explicit (magnitude, sign) split, so a posting pair
/// can negate the amount of any `i64`, including `i64::MIN`.
pub(crate) fn commit_signed(
    magnitude: u64,
    negative: bool,
    timestamp: i64,
    counter: u64,
    g: &EdwardsPoint,
    h: &EdwardsPoint,
    negate_hash: bool,
) -> Commitment {
    let mut amount_scalar = scalar_from_u64(magnitude);
    if negative {
        amount_scalar = -amount_scalar;
    }

    let mut hasher = Sha256::new();
    hasher.update((timestamp as u64).to_be_bytes());
    hasher.update(counter.to_be_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    let hash_scalar = scalar_from_digest(&digest);

    let blind = hash_scalar * h;
    let point = if negate_hash {
        amount_scalar * g - blind
    } else {
        amount_scalar * g + blind
    };
    Commitment::encode(&point)
}
