use obscura_curve::CurveError;
use thiserror::Error;

/// Errors surfaced by hiding and batch verification.
///
/// Batch checks keep "could not evaluate" (an error) strictly apart from
/// "evaluated and found unbalanced" (`Ok(false)`); callers must never
/// conflate the two. Nothing in this crate retries on error.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Parallel input sequences passed to a batch check have unequal
    /// lengths. Never silently truncated.
    #[error("parallel input sequences differ in length: {0}, {1}, {2}")]
    LengthMismatch(usize, usize, usize),
    /// A batch check received zero elements; rejected rather than
    /// vacuously accepted.
    #[error("batch check received no input")]
    Empty,
    /// Point decoding or randomness failure from the curve layer.
    #[error(transparent)]
    Curve(#[from] CurveError),
}
