//! Dense polynomials over a [`PrimeField`].
//! Coefficients are stored in ascending order starting from the constant term.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::Rng;

use super::PrimeField;
use crate::{NttError, NttResult};

/// Dense polynomial represented by coefficients in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    /// Coefficients starting from the constant term.
    pub coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Constructs a polynomial from raw coefficients.
    pub fn new(coefficients: Vec<BigUint>) -> Self {
        Self { coefficients }
    }

    /// Draws a random polynomial with between `1` and `max_terms` coefficients,
    /// where coefficient `i` is uniform in `[0, i]` before reduction modulo `p`.
    ///
    /// A `max_terms` of zero is treated as one.
    pub fn random<R: Rng + ?Sized>(field: &PrimeField, rng: &mut R, max_terms: usize) -> Self {
        let terms = rng.gen_range(1..=max_terms.max(1));
        let coefficients = (0..terms)
            .map(|index| field.element(rng.gen_range(0..=index as u64)))
            .collect();
        Self { coefficients }
    }

    /// Number of stored coefficients, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns `true` if no coefficients are stored.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates the polynomial at the provided point using Horner's method.
    pub fn evaluate(&self, field: &PrimeField, point: &BigUint) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, coeff| {
                field.add(&field.mul(&acc, point), coeff)
            })
    }

    /// Returns the degree of the polynomial or `None` if the polynomial is zero.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|coeff| !coeff.is_zero())
    }

    /// Returns the coefficients zero-padded to exactly `size` entries, ready to
    /// be handed to a transform of that size.
    pub fn padded_to(&self, size: usize) -> NttResult<Vec<BigUint>> {
        if self.coefficients.len() > size {
            return Err(NttError::PolynomialTooLong {
                terms: self.coefficients.len(),
                size,
            });
        }
        let mut padded = self.coefficients.clone();
        padded.resize(size, BigUint::zero());
        Ok(padded)
    }
}
