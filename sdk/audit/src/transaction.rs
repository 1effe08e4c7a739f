//! Plaintext and hidden transactions.
//!
//! A plaintext transaction exists only inside the reporting
//! organization: it is hidden exactly once and then discarded, never
//! transmitted. The hidden form keeps SHA-256 digests of the party
//! identities and a commitment in place of the amount; auxiliary bytes
//! and the timestamp pass through unchanged. Hidden transactions are
//! immutable once produced.

use curve25519_dalek::edwards::EdwardsPoint;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::commitment::{Commitment, commit, commit_signed};

/// Length of an identity digest.
pub const DIGEST_LEN: usize = 32;

/// A plaintext transaction, prior to hiding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlainTransaction {
    pub sender: String,
    pub receiver: String,
    pub amount: i64,
    #[serde(rename = "aux", with = "hex::serde")]
    pub auxiliary: Vec<u8>,
    pub timestamp: i64,
}

/// A hidden transaction: hashed identities, committed amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HiddenTransaction {
    #[serde(with = "hex::serde")]
    pub sender: [u8; DIGEST_LEN],
    #[serde(with = "hex::serde")]
    pub receiver: [u8; DIGEST_LEN],
    #[serde(rename = "commit")]
    pub commitment: Commitment,
    #[serde(rename = "aux", with = "hex::serde")]
    pub auxiliary: Vec<u8>,
    pub timestamp: i64,
}

fn identity_digest(name: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}

impl PlainTransaction {
    /// Hide this transaction under bases `g` and `h`.
    pub fn hide(
        &self,
        counter: u64,
        g: &EdwardsPoint,
        h: &EdwardsPoint,
        negate_hash: bool,
    ) -> HiddenTransaction {
        HiddenTransaction {
            sender: identity_digest(&self.sender),
            receiver: identity_digest(&self.receiver),
            commitment: commit(self.amount, self.timestamp, counter, g, h, negate_hash),
            auxiliary: self.auxiliary.clone(),
            timestamp: self.timestamp,
        }
    }

    /// Produce the cancelling double-entry pair of hidden postings.
    ///
    /// The first leg is the plain hiding; the second swaps the party
    /// digests, negates the amount and subtracts the blinding term.
    /// Invariant: the two commitments sum to the identity element for
    /// every amount, timestamp, counter, and base pair, which is what
    /// lets the sum-check verifier test pure conservation.
    pub fn hide_pair(
        &self,
        counter: u64,
        g: &EdwardsPoint,
        h: &EdwardsPoint,
    ) -> (HiddenTransaction, HiddenTransaction) {
        let first = self.hide(counter, g, h, false);
        let second = HiddenTransaction {
            sender: first.receiver,
            receiver: first.sender,
            commitment: commit_signed(
                self.amount.unsigned_abs(),
                // sign flipped relative to the first leg
                self.amount >= 0,
                self.timestamp,
                counter,
                g,
                h,
                true,
            ),
            auxiliary: self.auxiliary.clone(),
            timestamp: self.timestamp,
        };
        (first, second)
    }
}
