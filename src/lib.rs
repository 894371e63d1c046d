//! Core library entry point for the `radix2-ntt` crate.
//!
//! The crate evaluates dense polynomials over arbitrary-precision prime fields
//! at every power of a primitive `n`-th root of unity.  Three layers are
//! exposed:
//!
//! * [`fft::roots`] samples roots of unity of exact order `n`,
//! * [`fft`] hosts the recursive reference engine and the iterative in-place
//!   engine,
//! * [`verify`] spot-checks a transform against direct evaluation.
//!
//! All randomness is injected by the caller through [`rand::Rng`] values so
//! every run can be replayed from a seed.

use core::fmt;

use num_bigint::BigUint;

pub mod config;
pub mod driver;
pub mod fft;
pub mod field;
pub mod utils;
pub mod verify;

pub use fft::roots::{has_exact_order, sample_root};
pub use fft::{ntt, NttEngine, Radix2Domain, TwiddleStrategy};
pub use field::{Polynomial, PrimeField};
pub use verify::{EvaluationVerifier, VerificationMode};

/// Result type used throughout the library to surface deterministic errors.
pub type NttResult<T> = core::result::Result<T, NttError>;

/// Error enumeration for the transform pipeline.
///
/// Every variant is raised synchronously before (or instead of) producing an
/// output, so callers never observe a plausible-looking but wrong evaluation
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NttError {
    /// The supplied modulus cannot define a usable field.
    InvalidModulus {
        /// Reason the modulus was rejected.
        reason: &'static str,
    },
    /// The transform size is zero or not a power of two.
    SizeNotPowerOfTwo {
        /// Offending size.
        size: usize,
    },
    /// The transform size does not divide `p - 1`, so no root of that order exists.
    UnsupportedDomain {
        /// Requested transform size.
        size: usize,
        /// Largest `k` such that `2^k` divides `p - 1`.
        two_adicity: u64,
    },
    /// Input length does not match the transform size.
    LengthMismatch {
        /// Expected number of elements.
        expected: usize,
        /// Number of elements received.
        got: usize,
    },
    /// A coefficient or evaluation is not reduced modulo `p`.
    NonCanonicalElement {
        /// Position of the offending element.
        index: usize,
    },
    /// No root of the requested order was found within the attempt budget,
    /// which indicates a composite modulus.
    RootNotFound {
        /// Requested order.
        size: usize,
        /// Number of candidates drawn.
        attempts: u32,
    },
    /// The supplied root is not reduced modulo `p`.
    NonCanonicalRoot,
    /// The supplied root does not have multiplicative order exactly `size`.
    RootOrderMismatch {
        /// Order the root was expected to have.
        size: usize,
    },
    /// A polynomial has more terms than the requested transform size.
    PolynomialTooLong {
        /// Number of coefficients held by the polynomial.
        terms: usize,
        /// Target transform size.
        size: usize,
    },
    /// Configuration values failed validation.
    InvalidConfig {
        /// Reason the configuration was rejected.
        reason: &'static str,
    },
    /// Direct evaluation disagrees with the transform output.
    EvaluationMismatch {
        /// Output position that failed the check.
        index: usize,
        /// Value obtained by direct evaluation.
        expected: BigUint,
        /// Value reported by the transform.
        actual: BigUint,
    },
}

impl fmt::Display for NttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NttError::InvalidModulus { reason } => write!(f, "invalid modulus: {}", reason),
            NttError::SizeNotPowerOfTwo { size } => {
                write!(f, "transform size {} is not a power of two", size)
            }
            NttError::UnsupportedDomain { size, two_adicity } => write!(
                f,
                "transform size {} does not divide p - 1 (two-adicity {})",
                size, two_adicity
            ),
            NttError::LengthMismatch { expected, got } => {
                write!(f, "length mismatch: expected {}, got {}", expected, got)
            }
            NttError::NonCanonicalElement { index } => {
                write!(f, "element at index {} is not reduced modulo p", index)
            }
            NttError::RootNotFound { size, attempts } => write!(
                f,
                "no root of order {} found after {} attempts",
                size, attempts
            ),
            NttError::NonCanonicalRoot => write!(f, "root of unity is not reduced modulo p"),
            NttError::RootOrderMismatch { size } => {
                write!(f, "root of unity does not have order {}", size)
            }
            NttError::PolynomialTooLong { terms, size } => write!(
                f,
                "polynomial with {} terms does not fit a transform of size {}",
                terms, size
            ),
            NttError::InvalidConfig { reason } => write!(f, "invalid configuration: {}", reason),
            NttError::EvaluationMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "evaluation mismatch at index {}: expected {}, got {}",
                index, expected, actual
            ),
        }
    }
}

impl std::error::Error for NttError {}
