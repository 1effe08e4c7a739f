use thiserror::Error;

/// Errors surfaced by the curve layer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The byte string does not decode to a valid compressed curve point.
    #[error("malformed compressed point encoding")]
    MalformedPoint,
    /// The secure entropy source is unavailable. Fatal and not retriable:
    /// it indicates a broken execution environment, not a transient fault.
    #[error("secure randomness source failed")]
    RandomnessFailure,
}
