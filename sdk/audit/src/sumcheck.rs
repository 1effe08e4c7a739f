//! Randomized conservation checks over committed epochs.
//!
//! Every check reduces to one primitive: form the "should-be-zero"
//! point `last + sum(txs) - curr` and scale it by a fresh uniformly
//! random scalar. Summing many independently scaled deltas and testing
//! the sum against the identity accepts a dishonest batch only with
//! probability 1/l (l = group order), the standard soundness bound for
//! randomized linear-combination batch verification.
//!
//! Soundness holds only if the random scalars are sampled after all
//! checked values are fixed and used for a single pass; they are drawn
//! fresh per invocation from the injected source and never cached or
//! replayed. Each check is single-shot and stateless.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::traits::{Identity, IsIdentity};
use obscura_curve::{SecureRandom, random_scalar};

use crate::commitment::Commitment;
use crate::error::AuditError;
use crate::transaction::HiddenTransaction;

/// Compute the randomly scaled conservation delta for one type slot:
/// `r * (last + sum(txs) - curr)` with `r` fresh per call.
///
/// The result is the identity exactly when `curr` equals `last` plus the
/// batch's commitments (up to the negligible chance of `r = 0`).
pub fn scaled_delta<R: SecureRandom>(
    last: &Commitment,
    curr: &Commitment,
    txs: &[HiddenTransaction],
    rng: &mut R,
) -> Result<EdwardsPoint, AuditError> {
    let mut acc = last.decode()?;
    for tx in txs {
        acc += tx.commitment.decode()?;
    }
    acc -= curr.decode()?;
    let r = random_scalar(rng)?;
    Ok(r * acc)
}

/// Check conservation for one organization's epoch, per type.
///
/// The three slices are parallel, one slot per type: previous epoch-end
/// commitment, current epoch-end commitment, and the in-epoch hidden
/// transactions. Returns the scaled per-type deltas for forensic
/// inspection alongside the verdict: `true` iff the deltas sum to the
/// identity. Length mismatch and empty input are errors, reported
/// before any curve arithmetic and kept distinct from a `false` verdict.
pub fn check_org_epoch<R: SecureRandom>(
    last_commits: &[Commitment],
    curr_commits: &[Commitment],
    tx_lists: &[Vec<HiddenTransaction>],
    rng: &mut R,
) -> Result<(Vec<Commitment>, bool), AuditError> {
    check_lengths(last_commits.len(), curr_commits.len(), tx_lists.len())?;

    let mut deltas = Vec::with_capacity(last_commits.len());
    let mut sum = EdwardsPoint::identity();
    for i in 0..last_commits.len() {
        let delta = scaled_delta(&last_commits[i], &curr_commits[i], &tx_lists[i], rng)?;
        sum += delta;
        deltas.push(Commitment::encode(&delta));
    }
    Ok((deltas, sum.is_identity()))
}

/// Check conservation across all organizations at once.
///
/// `org_epoch_commits[i][j]` holds organization `i`'s pre-aggregated
/// in-epoch commitment sum for type `j`. Every (organization, type)
/// term is scaled by an independent fresh random scalar and folded into
/// one grand sum; accept iff that sum is the identity. Lengths are
/// validated at both nesting levels before any curve arithmetic.
pub fn check_all_org_epoch<R: SecureRandom>(
    org_last_commits: &[Vec<Commitment>],
    org_epoch_commits: &[Vec<Commitment>],
    org_curr_commits: &[Vec<Commitment>],
    rng: &mut R,
) -> Result<bool, AuditError> {
    check_lengths(
        org_last_commits.len(),
        org_epoch_commits.len(),
        org_curr_commits.len(),
    )?;
    for ((last, epoch), curr) in org_last_commits
        .iter()
        .zip(org_epoch_commits)
        .zip(org_curr_commits)
    {
        check_lengths(last.len(), epoch.len(), curr.len())?;
    }

    let mut grand = EdwardsPoint::identity();
    for ((last, epoch), curr) in org_last_commits
        .iter()
        .zip(org_epoch_commits)
        .zip(org_curr_commits)
    {
        for j in 0..last.len() {
            let delta = last[j].decode()? + epoch[j].decode()? - curr[j].decode()?;
            let r = random_scalar(rng)?;
            grand += r * delta;
        }
    }
    Ok(grand.is_identity())
}

fn check_lengths(last: usize, curr: usize, txs: usize) -> Result<(), AuditError> {
    if last != curr || last != txs {
        return Err(AuditError::LengthMismatch(last, curr, txs));
    }
    if last == 0 {
        return Err(AuditError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use obscura_curve::{SeededEntropy, random_generator};

    use super::*;
    use crate::commitment::commit;
    use crate::transaction::PlainTransaction;

    fn test_bases(rng: &mut SeededEntropy) -> (EdwardsPoint, EdwardsPoint) {
        let g = random_generator(rng).unwrap().0;
        let h = random_generator(rng).unwrap().0;
        (g, h)
    }

    fn dummy_txs(
        g: &EdwardsPoint,
        h: &EdwardsPoint,
        num_txs: usize,
    ) -> Vec<HiddenTransaction> {
        (0..num_txs)
            .map(|i| {
                let plain = PlainTransaction {
                    sender: format!("org-{i}"),
                    receiver: format!("org-{}", i + 1),
                    amount: (i as i64 + 1) * 7 - 11,
                    auxiliary: Vec::new(),
                    timestamp: 1_700_000_000 + i as i64,
                };
                plain.hide(i as u64, g, h, false)
            })
            .collect()
    }

    /// One honest type slot: curr = last + sum of the epoch's commitments.
    fn honest_type_epoch(
        rng: &mut SeededEntropy,
        num_txs: usize,
    ) -> (Commitment, Commitment, Vec<HiddenTransaction>) {
        let (g, h) = test_bases(rng);
        let last = commit(12_345, 1_699_999_999, 0, &g, &h, false);
        let txs = dummy_txs(&g, &h, num_txs);
        let mut curr_point = last.decode().unwrap();
        for tx in &txs {
            curr_point += tx.commitment.decode().unwrap();
        }
        (last, Commitment::encode(&curr_point), txs)
    }

    fn random_commitment(rng: &mut SeededEntropy) -> Commitment {
        Commitment::encode(&random_generator(rng).unwrap().0)
    }

    #[test]
    fn test_scaled_delta_identity_when_balanced() {
        let mut rng = SeededEntropy::from_seed([30u8; 32]);
        let (last, curr, txs) = honest_type_epoch(&mut rng, 100);
        let delta = scaled_delta(&last, &curr, &txs, &mut rng).unwrap();
        assert!(delta.is_identity());
    }

    #[test]
    fn test_scaled_delta_detects_tampered_current_commitment() {
        let mut rng = SeededEntropy::from_seed([31u8; 32]);
        let (last, _, txs) = honest_type_epoch(&mut rng, 16);
        let forged = random_commitment(&mut rng);
        let delta = scaled_delta(&last, &forged, &txs, &mut rng).unwrap();
        assert!(!delta.is_identity());
    }

    #[test]
    fn test_scaled_delta_detects_tampered_transaction() {
        let mut rng = SeededEntropy::from_seed([32u8; 32]);
        let (last, curr, mut txs) = honest_type_epoch(&mut rng, 16);
        txs[7].commitment = random_commitment(&mut rng);
        let delta = scaled_delta(&last, &curr, &txs, &mut rng).unwrap();
        assert!(!delta.is_identity());
    }

    fn org_epoch_fixture(
        rng: &mut SeededEntropy,
        num_types: usize,
        num_txs: usize,
    ) -> (Vec<Commitment>, Vec<Commitment>, Vec<Vec<HiddenTransaction>>) {
        let mut lasts = Vec::with_capacity(num_types);
        let mut currs = Vec::with_capacity(num_types);
        let mut tx_lists = Vec::with_capacity(num_types);
        for _ in 0..num_types {
            let (last, curr, txs) = honest_type_epoch(rng, num_txs);
            lasts.push(last);
            currs.push(curr);
            tx_lists.push(txs);
        }
        (lasts, currs, tx_lists)
    }

    #[test]
    fn test_check_org_epoch_accepts_honest_batch() {
        let mut rng = SeededEntropy::from_seed([33u8; 32]);
        let (lasts, currs, tx_lists) = org_epoch_fixture(&mut rng, 4, 100);
        let (deltas, accept) = check_org_epoch(&lasts, &currs, &tx_lists, &mut rng).unwrap();
        assert!(accept);
        assert_eq!(deltas.len(), 4);
        for delta in &deltas {
            assert!(delta.decode().unwrap().is_identity());
        }
    }

    #[test]
    fn test_check_org_epoch_rejects_single_flipped_type() {
        let mut rng = SeededEntropy::from_seed([34u8; 32]);
        let (lasts, mut currs, tx_lists) = org_epoch_fixture(&mut rng, 4, 25);
        currs[2] = random_commitment(&mut rng);
        let (deltas, accept) = check_org_epoch(&lasts, &currs, &tx_lists, &mut rng).unwrap();
        assert!(!accept, "corrupted type must fail the check");
        assert!(!deltas[2].decode().unwrap().is_identity());
    }

    #[test]
    fn test_check_org_epoch_validates_shape() {
        let mut rng = SeededEntropy::from_seed([35u8; 32]);
        let (lasts, currs, tx_lists) = org_epoch_fixture(&mut rng, 3, 2);

        let err = check_org_epoch(&lasts[..2], &currs, &tx_lists, &mut rng).unwrap_err();
        assert!(matches!(err, AuditError::LengthMismatch(2, 3, 3)));

        let err = check_org_epoch(&[], &[], &[], &mut rng).unwrap_err();
        assert!(matches!(err, AuditError::Empty));
    }

    /// Honest all-organization fixture in pre-aggregated form.
    fn all_org_fixture(
        rng: &mut SeededEntropy,
        num_orgs: usize,
        num_types: usize,
    ) -> (Vec<Vec<Commitment>>, Vec<Vec<Commitment>>, Vec<Vec<Commitment>>) {
        let mut org_lasts = Vec::with_capacity(num_orgs);
        let mut org_epochs = Vec::with_capacity(num_orgs);
        let mut org_currs = Vec::with_capacity(num_orgs);
        for _ in 0..num_orgs {
            let mut lasts = Vec::with_capacity(num_types);
            let mut epochs = Vec::with_capacity(num_types);
            let mut currs = Vec::with_capacity(num_types);
            for _ in 0..num_types {
                let (last, curr, txs) = honest_type_epoch(rng, 10);
                let mut epoch_point = EdwardsPoint::identity();
                for tx in &txs {
                    epoch_point += tx.commitment.decode().unwrap();
                }
                lasts.push(last);
                epochs.push(Commitment::encode(&epoch_point));
                currs.push(curr);
            }
            org_lasts.push(lasts);
            org_epochs.push(epochs);
            org_currs.push(currs);
        }
        (org_lasts, org_epochs, org_currs)
    }

    #[test]
    fn test_check_all_org_epoch_accepts_honest_batch() {
        let mut rng = SeededEntropy::from_seed([36u8; 32]);
        let (lasts, epochs, currs) = all_org_fixture(&mut rng, 5, 4);
        assert!(check_all_org_epoch(&lasts, &epochs, &currs, &mut rng).unwrap());
    }

    #[test]
    fn test_check_all_org_epoch_rejects_single_corrupted_org() {
        let mut rng = SeededEntropy::from_seed([37u8; 32]);
        let (lasts, mut epochs, currs) = all_org_fixture(&mut rng, 5, 4);
        epochs[3][1] = random_commitment(&mut rng);
        assert!(!check_all_org_epoch(&lasts, &epochs, &currs, &mut rng).unwrap());
    }

    #[test]
    fn test_check_all_org_epoch_validates_both_nesting_levels() {
        let mut rng = SeededEntropy::from_seed([38u8; 32]);
        let (lasts, mut epochs, currs) = all_org_fixture(&mut rng, 3, 4);

        // Outer mismatch.
        let err = check_all_org_epoch(&lasts[..2], &epochs, &currs, &mut rng).unwrap_err();
        assert!(matches!(err, AuditError::LengthMismatch(2, 3, 3)));

        // Inner mismatch in one organization.
        epochs[1].pop();
        let err = check_all_org_epoch(&lasts, &epochs, &currs, &mut rng).unwrap_err();
        assert!(matches!(err, AuditError::LengthMismatch(4, 3, 4)));

        // Zero organizations.
        let err = check_all_org_epoch(&[], &[], &[], &mut rng).unwrap_err();
        assert!(matches!(err, AuditError::Empty));
    }
}
