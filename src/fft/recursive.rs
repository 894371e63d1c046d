//! Recursive radix-2 decimation-in-time transform.
//!
//! The coefficients are split into the even-indexed half `B` and the
//! odd-indexed half `C`, both halves are transformed with `ω²` (a root of
//! order `n/2`) and the results are recombined as
//!
//! ```text
//! out[j] = B̄[j mod n/2] + ω^j · C̄[j mod n/2]      for 0 ≤ j < n
//! ```
//!
//! With the `parallel` feature the two half transforms are forked onto the
//! rayon pool once they are large enough; evaluation order does not affect
//! the result.

use num_bigint::BigUint;
use tracing::debug;

use super::{Fft, Radix2Domain, TwiddleStrategy};
use crate::field::PrimeField;
use crate::utils::join_halves;
use crate::NttResult;

/// Recursive transform plan.
#[derive(Debug, Clone)]
pub struct RecursiveNtt {
    domain: Radix2Domain,
    twiddles: TwiddleStrategy,
}

impl RecursiveNtt {
    /// Creates a plan over `domain` using the given twiddle strategy.
    pub fn new(domain: Radix2Domain, twiddles: TwiddleStrategy) -> Self {
        Self { domain, twiddles }
    }

    /// Twiddle strategy used when combining halves.
    pub fn twiddles(&self) -> TwiddleStrategy {
        self.twiddles
    }
}

impl Fft for RecursiveNtt {
    fn domain(&self) -> &Radix2Domain {
        &self.domain
    }

    fn name(&self) -> &'static str {
        match self.twiddles {
            TwiddleStrategy::Exponentiate => "recursive-exponentiate",
            TwiddleStrategy::Incremental => "recursive-incremental",
        }
    }

    fn forward(&self, coefficients: &[BigUint]) -> NttResult<Vec<BigUint>> {
        self.domain.check_input(coefficients)?;
        debug!(
            size = self.domain.size(),
            engine = self.name(),
            "running forward transform"
        );
        Ok(transform(
            self.domain.field(),
            coefficients,
            self.domain.root(),
            self.twiddles,
        ))
    }
}

fn transform(
    field: &PrimeField,
    coefficients: &[BigUint],
    root: &BigUint,
    twiddles: TwiddleStrategy,
) -> Vec<BigUint> {
    let size = coefficients.len();
    if size == 1 {
        return coefficients.to_vec();
    }

    let half = size / 2;
    let even: Vec<BigUint> = coefficients.iter().step_by(2).cloned().collect();
    let odd: Vec<BigUint> = coefficients.iter().skip(1).step_by(2).cloned().collect();
    let root_squared = field.square(root);

    let (even_bar, odd_bar) = join_halves(
        half,
        || transform(field, &even, &root_squared, twiddles),
        || transform(field, &odd, &root_squared, twiddles),
    );

    let mut output = Vec::with_capacity(size);
    let mut twiddle = field.one();
    for j in 0..size {
        let k = j % half;
        if twiddles == TwiddleStrategy::Exponentiate {
            twiddle = field.pow_u64(root, j as u64);
        }
        output.push(field.add(&even_bar[k], &field.mul(&twiddle, &odd_bar[k])));
        if twiddles == TwiddleStrategy::Incremental {
            twiddle = field.mul(&twiddle, root);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_domain() -> Radix2Domain {
        let field = PrimeField::from_u64(17).expect("valid modulus");
        Radix2Domain::new(field, 4, BigUint::from(4u8)).expect("4 has order 4 mod 17")
    }

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn both_twiddle_strategies_match_hand_computed_values() {
        for twiddles in [TwiddleStrategy::Exponentiate, TwiddleStrategy::Incremental] {
            let plan = RecursiveNtt::new(toy_domain(), twiddles);
            let output = plan.forward(&big(&[1, 2, 3, 4])).expect("valid input");
            assert_eq!(output, big(&[10, 7, 15, 6]), "{}", plan.name());
        }
    }

    #[test]
    fn single_point_transform_is_identity() {
        let field = PrimeField::from_u64(17).expect("valid modulus");
        let domain = Radix2Domain::new(field, 1, BigUint::from(1u8)).expect("trivial domain");
        let plan = RecursiveNtt::new(domain, TwiddleStrategy::Exponentiate);
        assert_eq!(plan.forward(&big(&[5])).expect("valid input"), big(&[5]));
    }
}
