//! Field arithmetic primitives for the `radix2-ntt` crate.
//! Contains the prime field descriptor and dense polynomial utilities.

pub mod polynomial;
pub mod prime_field;

pub use polynomial::Polynomial;
pub use prime_field::{PrimeField, BLS12_381_SCALAR_MODULUS_HEX, GOLDILOCKS_MODULUS};

#[cfg(test)]
pub mod tests;
