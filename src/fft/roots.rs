//! Sampling of primitive radix-2 roots of unity.
//!
//! For a prime `p` the multiplicative group has order `p - 1` and is cyclic,
//! so raising a uniform element to `(p - 1)/n` lands uniformly in the unique
//! subgroup of order `n`.  Half of that subgroup has exact order `n` when `n`
//! is a power of two, hence the sampler needs two draws on average.

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;
use tracing::{debug, trace};

use crate::field::PrimeField;
use crate::utils::deterministic_rng;
use crate::{NttError, NttResult};

/// Upper bound on candidate draws before the sampler gives up.
///
/// With a prime modulus each draw fails with probability at most 1/2, so the
/// bound is only reached when the modulus is not actually prime.
pub const MAX_SAMPLING_ATTEMPTS: u32 = 256;

/// Domain label used by [`derive_root`].
pub const ROOT_DERIVATION_LABEL: &str = "radix2-ntt/roots";

/// Returns `true` if `root` has multiplicative order exactly `size`.
///
/// `size` must be a power of two, in which case the only prime factor is 2 and
/// the check reduces to `root^size = 1` and `root^(size/2) ≠ 1`.
pub fn has_exact_order(field: &PrimeField, root: &BigUint, size: usize) -> bool {
    if !size.is_power_of_two() {
        return false;
    }
    let one = BigUint::one();
    if size == 1 {
        return root == &one;
    }
    field.pow_u64(root, size as u64) == one && field.pow_u64(root, (size / 2) as u64) != one
}

/// Samples an element of multiplicative order exactly `size`.
///
/// Fails up front when `size` is not a power of two or does not divide
/// `p - 1`.  `size == 1` yields the identity.
pub fn sample_root<R: Rng + ?Sized>(
    field: &PrimeField,
    size: usize,
    rng: &mut R,
) -> NttResult<BigUint> {
    field.ensure_domain(size)?;
    if size == 1 {
        return Ok(BigUint::one());
    }

    let exponent = field.group_order() / BigUint::from(size);
    for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
        let candidate = rng.gen_biguint_below(field.modulus());
        let root = field.pow(&candidate, &exponent);
        if has_exact_order(field, &root, size) {
            debug!(size, attempt, "sampled root of unity");
            return Ok(root);
        }
        trace!(size, attempt, "rejected root candidate");
    }
    Err(NttError::RootNotFound {
        size,
        attempts: MAX_SAMPLING_ATTEMPTS,
    })
}

/// Deterministically derives a root of order `size` from a generator keyed on
/// [`ROOT_DERIVATION_LABEL`] and the size.  Repeated calls agree.
pub fn derive_root(field: &PrimeField, size: usize) -> NttResult<BigUint> {
    let mut rng = deterministic_rng(ROOT_DERIVATION_LABEL, size as u64);
    sample_root(field, size, &mut rng)
}
