//! Injected secure randomness.
//!
//! Batch verification draws fresh random scalars per check, so the
//! entropy source is an explicit dependency rather than a process-wide
//! global: production code passes [`OsEntropy`], tests pass a
//! [`SeededEntropy`] for reproducible runs. Each thread running checks
//! in parallel holds its own source value.

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng, TryRngCore};

use crate::error::CurveError;
use crate::scalar::{WIDE_LEN, wide_scalar};

/// A cryptographically secure byte source.
pub trait SecureRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CurveError>;
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl SecureRandom for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CurveError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| CurveError::RandomnessFailure)
    }
}

/// Deterministic ChaCha20 stream for reproducible verification in tests.
#[derive(Debug, Clone)]
pub struct SeededEntropy(ChaCha20Rng);

impl SeededEntropy {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self(ChaCha20Rng::from_seed(seed))
    }
}

impl SecureRandom for SeededEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CurveError> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

/// Sample a uniform scalar at the full 512-bit reduction width.
pub fn random_scalar<R: SecureRandom + ?Sized>(rng: &mut R) -> Result<Scalar, CurveError> {
    let mut bytes = [0u8; WIDE_LEN];
    rng.fill(&mut bytes)?;
    Ok(wide_scalar(&bytes))
}

/// Sample a generator as uniform-scalar-times-base-point, returning the
/// point together with its discrete log.
///
/// Sampling twice and discarding the returned scalars yields a base pair
/// `(G, H)` with no known discrete-log relation, as required by the
/// commitment scheme.
pub fn random_generator<R: SecureRandom + ?Sized>(
    rng: &mut R,
) -> Result<(EdwardsPoint, Scalar), CurveError> {
    let secret = random_scalar(rng)?;
    Ok((secret * ED25519_BASEPOINT_POINT, secret))
}
