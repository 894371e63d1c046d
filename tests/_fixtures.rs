#![allow(dead_code)]

use num_bigint::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use radix2_ntt::fft::Radix2Domain;
use radix2_ntt::field::{Polynomial, PrimeField};

pub fn big(values: &[u64]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

pub fn toy_field() -> PrimeField {
    PrimeField::from_u64(17).expect("17 is a valid modulus")
}

/// `p = 17`, `n = 4`, `ω = 4`.
pub fn toy_domain() -> Radix2Domain {
    Radix2Domain::new(toy_field(), 4, BigUint::from(4u8)).expect("4 has order 4 mod 17")
}

pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

pub fn random_coefficients(field: &PrimeField, size: usize, rng: &mut ChaCha20Rng) -> Vec<BigUint> {
    (0..size)
        .map(|_| rng.gen_biguint_below(field.modulus()))
        .collect()
}

/// Horner evaluation at every domain point, independent of the engines.
pub fn naive_evaluations(domain: &Radix2Domain, coefficients: &[BigUint]) -> Vec<BigUint> {
    let polynomial = Polynomial::new(coefficients.to_vec());
    domain
        .elements()
        .map(|point| polynomial.evaluate(domain.field(), &point))
        .collect()
}
