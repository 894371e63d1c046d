//! In-place iterative radix-2 transform.
//!
//! The input is permuted into bit-reversed order and then combined in
//! `log2(n)` butterfly passes.  Pass `s` works on blocks of length
//! `len = 2^s` with the order-`len` root `ω^(n/len)`; inside each block the
//! twiddle is advanced by one multiplication per butterfly.
//!
//! The butterfly `(u + t·v, u - t·v)` relies on `ω^(n/2) = -1`, which holds
//! for any root of exact order `n` in a prime field.

use num_bigint::BigUint;
use tracing::debug;

use super::{Fft, Radix2Domain};
use crate::field::PrimeField;
use crate::NttResult;

/// Iterative in-place transform plan.
#[derive(Debug, Clone)]
pub struct IterativeNtt {
    domain: Radix2Domain,
}

impl IterativeNtt {
    /// Creates a plan over `domain`.
    pub fn new(domain: Radix2Domain) -> Self {
        Self { domain }
    }

    /// Transforms `values` in place after checking them against the domain.
    pub fn forward_in_place(&self, values: &mut [BigUint]) -> NttResult<()> {
        self.domain.check_input(values)?;
        debug!(
            size = self.domain.size(),
            engine = self.name(),
            "running forward transform"
        );
        transform_in_place(self.domain.field(), values, self.domain.root());
        Ok(())
    }
}

impl Fft for IterativeNtt {
    fn domain(&self) -> &Radix2Domain {
        &self.domain
    }

    fn name(&self) -> &'static str {
        "iterative"
    }

    fn forward(&self, coefficients: &[BigUint]) -> NttResult<Vec<BigUint>> {
        let mut values = coefficients.to_vec();
        self.forward_in_place(&mut values)?;
        Ok(values)
    }
}

/// Reorders `values` so that position `i` holds the entry at `reverse(i)`,
/// reversing `log2(len)` bits.
pub fn bit_reverse_permute<T>(values: &mut [T]) {
    let size = values.len();
    if size <= 1 {
        return;
    }
    debug_assert!(size.is_power_of_two(), "bit reversal needs a power of two");
    let shift = usize::BITS - size.trailing_zeros();
    for i in 0..size {
        let j = i.reverse_bits() >> shift;
        if i < j {
            values.swap(i, j);
        }
    }
}

fn transform_in_place(field: &PrimeField, values: &mut [BigUint], root: &BigUint) {
    let size = values.len();
    if size <= 1 {
        return;
    }
    bit_reverse_permute(values);

    let mut len = 2;
    while len <= size {
        let step = field.pow_u64(root, (size / len) as u64);
        #[cfg(feature = "parallel")]
        if crate::utils::parallelism_enabled() && size >= crate::utils::parallel::PARALLEL_MIN_SIZE
        {
            use rayon::prelude::*;
            values
                .par_chunks_mut(len)
                .for_each(|block| butterfly_block(field, block, &step));
            len <<= 1;
            continue;
        }
        for block in values.chunks_mut(len) {
            butterfly_block(field, block, &step);
        }
        len <<= 1;
    }
}

fn butterfly_block(field: &PrimeField, block: &mut [BigUint], step: &BigUint) {
    let half = block.len() / 2;
    let (low, high) = block.split_at_mut(half);
    let mut twiddle = field.one();
    for (u, v) in low.iter_mut().zip(high.iter_mut()) {
        let t = field.mul(&twiddle, v);
        *v = field.sub(u, &t);
        *u = field.add(u, &t);
        twiddle = field.mul(&twiddle, step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_reversal_of_eight() {
        let mut values: Vec<usize> = (0..8).collect();
        bit_reverse_permute(&mut values);
        assert_eq!(values, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn bit_reversal_is_an_involution() {
        let original: Vec<usize> = (0..64).collect();
        let mut values = original.clone();
        bit_reverse_permute(&mut values);
        bit_reverse_permute(&mut values);
        assert_eq!(values, original);
    }

    #[test]
    fn matches_hand_computed_values() {
        let field = PrimeField::from_u64(17).expect("valid modulus");
        let domain = Radix2Domain::new(field, 4, BigUint::from(4u8)).expect("valid domain");
        let plan = IterativeNtt::new(domain);
        let input: Vec<BigUint> = [1u8, 2, 3, 4].into_iter().map(BigUint::from).collect();
        let expected: Vec<BigUint> = [10u8, 7, 15, 6].into_iter().map(BigUint::from).collect();
        assert_eq!(plan.forward(&input).expect("valid input"), expected);
    }
}
