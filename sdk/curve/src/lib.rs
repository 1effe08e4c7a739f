//! Edwards25519 group helpers for the Obscura audit stack.
//!
//! Everything the accounting core needs from the curve lives here:
//!
//! - compressed point encoding/decoding ([`encode_point`] / [`decode_point`])
//! - bias-free scalar derivation by wide reduction ([`wide_scalar`],
//!   [`scalar_from_u64`], [`scalar_from_digest`])
//! - an injected secure-randomness source ([`SecureRandom`]) with an OS
//!   backend for production and a seeded backend for reproducible tests
//! - uniform-scalar-times-base-point sampling ([`random_generator`]) for
//!   producing commitment bases with no known discrete-log relation

pub mod entropy;
pub mod error;
pub mod point;
pub mod scalar;

pub use entropy::{OsEntropy, SecureRandom, SeededEntropy, random_generator, random_scalar};
pub use error::CurveError;
pub use point::{POINT_LEN, decode_point, encode_point};
pub use scalar::{WIDE_LEN, scalar_from_digest, scalar_from_u64, wide_scalar};
