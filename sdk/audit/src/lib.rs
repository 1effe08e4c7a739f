//! Confidential transaction-accounting core.
//!
//! Lets independent organizations report periodic transaction batches to
//! a third-party auditor who verifies value conservation across an
//! accounting epoch without learning any individual amount.
//!
//! ```text
//! PlainTransaction ---hide---> HiddenTransaction
//!                                   |
//!            +----------------------+---------------------+
//!            v                                            v
//!     CommitmentTree                               sum-check verifier
//!     (root = exact group-sum                (last + epoch txs - curr
//!      of all leaf commitments,               must cancel; batched with
//!      anchorable externally)                 fresh random weights)
//! ```
//!
//! Amounts are hidden inside commitments `amount*G +/- blind*H` over two
//! discrete-log-unrelated bases; double-entry postings come in pairs
//! whose commitments cancel algebraically, which is what lets the
//! verifier test pure conservation without ever opening an amount.

pub mod commitment;
pub mod error;
pub mod sumcheck;
pub mod transaction;
pub mod tree;

pub use commitment::{COMMITMENT_LEN, Commitment, commit};
pub use error::AuditError;
pub use sumcheck::{check_all_org_epoch, check_org_epoch, scaled_delta};
pub use transaction::{DIGEST_LEN, HiddenTransaction, PlainTransaction};
pub use tree::CommitmentTree;
