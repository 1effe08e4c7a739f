//! Homomorphic accumulation tree.
//!
//! ```text
//! level 2:        C0+C1+C2     <- root
//!                /        \
//! level 1:    C0+C1       C2   (lone trailing node carried up as-is)
//!             /    \       |
//! level 0:  C0     C1     C2   (leaf commitments, input order)
//! ```
//!
//! Parents are formed by point addition, never hashing, and an unpaired
//! node is carried up unchanged, so the root is always the exact
//! group-sum of the leaves regardless of shape. The root is what gets
//! anchored externally; inclusion-path generation belongs to the
//! external Merkle-proof collaborator and is not provided here.

use std::collections::HashMap;

use crate::commitment::{COMMITMENT_LEN, Commitment};
use crate::error::AuditError;
use crate::transaction::HiddenTransaction;

/// Accumulation tree over an ordered batch of commitments.
#[derive(Debug, Clone)]
pub struct CommitmentTree {
    /// Level 0 holds the leaves; the top level holds the single root.
    levels: Vec<Vec<Commitment>>,
    /// Leaf bytes -> position, for later inclusion queries. Duplicate
    /// leaves overwrite earlier entries (last write wins).
    leaf_index: HashMap<[u8; COMMITMENT_LEN], usize>,
}

impl CommitmentTree {
    /// Build the tree bottom-up from leaf commitments.
    ///
    /// Adjacent nodes are paired left to right and summed as points;
    /// rejects an empty batch and surfaces a decoding error for any
    /// malformed leaf that takes part in a pairing.
    pub fn build(leaves: &[Commitment]) -> Result<Self, AuditError> {
        if leaves.is_empty() {
            return Err(AuditError::Empty);
        }

        let mut leaf_index = HashMap::with_capacity(leaves.len());
        for (position, leaf) in leaves.iter().enumerate() {
            leaf_index.insert(leaf.0, position);
        }

        let mut levels: Vec<Vec<Commitment>> = Vec::new();
        let mut current = leaves.to_vec();
        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                next.push(match pair {
                    [left, right] => Commitment::encode(&(left.decode()? + right.decode()?)),
                    [lone] => *lone,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                });
            }
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Ok(Self { levels, leaf_index })
    }

    /// Build directly from a batch of hidden transactions.
    pub fn from_transactions(txs: &[HiddenTransaction]) -> Result<Self, AuditError> {
        let leaves: Vec<Commitment> = txs.iter().map(|tx| tx.commitment).collect();
        Self::build(&leaves)
    }

    /// The top node; algebraically the group-sum of all leaves.
    pub fn root(&self) -> Commitment {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of levels; a single leaf is its own root at height 1.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Position of a leaf commitment in the input order, if present.
    pub fn position(&self, leaf: &Commitment) -> Option<usize> {
        self.leaf_index.get(&leaf.0).copied()
    }
}
