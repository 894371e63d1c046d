//! Spot-checking of transform outputs against direct polynomial evaluation.
//!
//! The verifier recomputes selected output positions `i` as
//!
//! ```text
//! y_i = Σ_{k : c_k ≠ 0} c_k · ω^(i·k)  (mod p)
//! ```
//!
//! and compares them with the transform result.  Sampled mode draws
//! `sample_count` positions uniformly with replacement, which catches a single
//! corrupted entry with probability `1 - (1 - 1/n)^sample_count`; this is a
//! smoke test, not a proof of correctness.  Exhaustive mode checks every
//! position at `O(n²)` cost, against the `O(n log n)` transform it checks.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::fft::roots::has_exact_order;
use crate::field::PrimeField;
use crate::{NttError, NttResult};

/// Number of sampled positions used by [`EvaluationVerifier::default`].
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Which output positions the verifier recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationMode {
    /// Draw positions uniformly at random, duplicates allowed.
    #[default]
    Sampled,
    /// Recompute every position.
    Exhaustive,
}

/// Checks a transform output against direct evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationVerifier {
    /// Position selection strategy.
    pub mode: VerificationMode,
    /// Number of draws in [`VerificationMode::Sampled`]; ignored otherwise.
    pub sample_count: usize,
}

impl Default for EvaluationVerifier {
    fn default() -> Self {
        Self::sampled(DEFAULT_SAMPLE_COUNT)
    }
}

impl EvaluationVerifier {
    /// Verifier drawing `sample_count` random positions.
    pub const fn sampled(sample_count: usize) -> Self {
        Self {
            mode: VerificationMode::Sampled,
            sample_count,
        }
    }

    /// Verifier recomputing every position.
    pub const fn exhaustive() -> Self {
        Self {
            mode: VerificationMode::Exhaustive,
            sample_count: 0,
        }
    }

    /// Probability that a single wrong entry among `size` outputs is caught.
    pub fn detection_probability(&self, size: usize) -> f64 {
        match self.mode {
            VerificationMode::Exhaustive => 1.0,
            VerificationMode::Sampled if size == 0 => 0.0,
            VerificationMode::Sampled => {
                let miss = 1.0 - 1.0 / size as f64;
                let draws = i32::try_from(self.sample_count).unwrap_or(i32::MAX);
                1.0 - miss.powi(draws)
            }
        }
    }

    /// Checks `evaluations` against `coefficients` on the domain generated by
    /// `root`, failing on the first disagreeing position.
    ///
    /// The length must be a power of two dividing `p - 1` and `root` must be a
    /// canonical element of exactly that order; otherwise the direct sums are
    /// not evaluations on the domain and the call fails before sampling.
    pub fn verify<R: Rng + ?Sized>(
        &self,
        field: &PrimeField,
        coefficients: &[BigUint],
        root: &BigUint,
        evaluations: &[BigUint],
        rng: &mut R,
    ) -> NttResult<()> {
        let size = coefficients.len();
        if evaluations.len() != size {
            return Err(NttError::LengthMismatch {
                expected: size,
                got: evaluations.len(),
            });
        }
        field.ensure_domain(size)?;
        if !field.is_canonical(root) {
            return Err(NttError::NonCanonicalRoot);
        }
        if size > 1 && !has_exact_order(field, root, size) {
            return Err(NttError::RootOrderMismatch { size });
        }

        let indices: Vec<usize> = match self.mode {
            VerificationMode::Sampled => (0..self.sample_count)
                .map(|_| rng.gen_range(0..size))
                .collect(),
            VerificationMode::Exhaustive => (0..size).collect(),
        };

        for (checked, &index) in indices.iter().enumerate() {
            let expected = evaluate_at_power(field, coefficients, root, index);
            if expected != evaluations[index] {
                warn!(index, "transform output disagrees with direct evaluation");
                return Err(NttError::EvaluationMismatch {
                    index,
                    expected,
                    actual: evaluations[index].clone(),
                });
            }
            trace!(checked = checked + 1, index, "point verified");
        }
        debug!(
            size,
            points = indices.len(),
            mode = ?self.mode,
            "evaluations verified"
        );
        Ok(())
    }
}

/// Evaluates the polynomial directly at `root^index`, skipping zero
/// coefficients.
///
/// Exponents are reduced modulo the coefficient count, which is sound when
/// `root` has order dividing that count.
pub fn evaluate_at_power(
    field: &PrimeField,
    coefficients: &[BigUint],
    root: &BigUint,
    index: usize,
) -> BigUint {
    let size = coefficients.len() as u128;
    coefficients
        .iter()
        .enumerate()
        .filter(|(_, coeff)| !coeff.is_zero())
        .fold(BigUint::zero(), |acc, (k, coeff)| {
            let exponent = (index as u128 * k as u128) % size;
            let power = field.pow_u64(root, exponent as u64);
            field.add(&acc, &field.mul(coeff, &power))
        })
}

/// Samples `sample_count` positions and checks them, see
/// [`EvaluationVerifier::verify`].
pub fn verify<R: Rng + ?Sized>(
    coefficients: &[BigUint],
    root: &BigUint,
    evaluations: &[BigUint],
    field: &PrimeField,
    sample_count: usize,
    rng: &mut R,
) -> NttResult<()> {
    EvaluationVerifier::sampled(sample_count).verify(field, coefficients, root, evaluations, rng)
}
