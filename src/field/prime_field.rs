//! Prime field arithmetic over arbitrary-precision moduli.
//!
//! Elements are plain [`BigUint`] values in canonical form, i.e. within
//! `[0, p)`.  The [`PrimeField`] descriptor owns the modulus and performs
//! every reduction, so elements stay value-like and carry no back-reference
//! to their field.
//!
//! # Invariants
//!
//! * The modulus is at least two.  Primality is *not* verified; callers are
//!   responsible for supplying a prime.
//! * Every method returning an element returns its canonical representative.

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{NttError, NttResult};

/// Hexadecimal encoding of the BLS12-381 scalar field order `r`, which is also
/// the base field of the JubJub curve.  `2^32` divides `r - 1`.
pub const BLS12_381_SCALAR_MODULUS_HEX: &str =
    "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// Goldilocks prime `2^64 - 2^32 + 1`.
pub const GOLDILOCKS_MODULUS: u64 = 0xffff_ffff_0000_0001;

/// Descriptor of the prime field `Z/pZ`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrimeField")
            .field(&format_args!("{:#x}", self.modulus))
            .finish()
    }
}

impl PrimeField {
    /// Creates a field descriptor for the given modulus.
    pub fn new(modulus: BigUint) -> NttResult<Self> {
        if modulus < BigUint::from(2u8) {
            return Err(NttError::InvalidModulus {
                reason: "modulus must be at least 2",
            });
        }
        Ok(Self { modulus })
    }

    /// Creates a field descriptor from a machine-word modulus.
    pub fn from_u64(modulus: u64) -> NttResult<Self> {
        Self::new(BigUint::from(modulus))
    }

    /// Parses a hexadecimal modulus, with or without a leading `0x`.
    pub fn from_hex(hex: &str) -> NttResult<Self> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let modulus = BigUint::parse_bytes(digits.as_bytes(), 16).ok_or(
            NttError::InvalidModulus {
                reason: "modulus is not valid hexadecimal",
            },
        )?;
        Self::new(modulus)
    }

    /// Scalar field of BLS12-381.
    pub fn bls12_381_scalar() -> Self {
        let modulus = BigUint::parse_bytes(BLS12_381_SCALAR_MODULUS_HEX.as_bytes(), 16)
            .expect("constant modulus is valid hexadecimal");
        Self { modulus }
    }

    /// Goldilocks field `2^64 - 2^32 + 1`.
    pub fn goldilocks() -> Self {
        Self {
            modulus: BigUint::from(GOLDILOCKS_MODULUS),
        }
    }

    /// Returns the prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Returns `p - 1`, the order of the multiplicative group.
    pub fn group_order(&self) -> BigUint {
        &self.modulus - 1u32
    }

    /// Largest `k` such that `2^k` divides `p - 1`.
    pub fn two_adicity(&self) -> u64 {
        self.group_order().trailing_zeros().unwrap_or(0)
    }

    /// Returns `true` if a subgroup of order `size` exists, i.e. `size` is a
    /// power of two dividing `p - 1`.
    pub fn supports_domain(&self, size: usize) -> bool {
        size.is_power_of_two() && u64::from(size.trailing_zeros()) <= self.two_adicity()
    }

    /// Checks that `size` is a power of two that divides `p - 1`.
    pub fn ensure_domain(&self, size: usize) -> NttResult<()> {
        if !size.is_power_of_two() {
            return Err(NttError::SizeNotPowerOfTwo { size });
        }
        if !self.supports_domain(size) {
            return Err(NttError::UnsupportedDomain {
                size,
                two_adicity: self.two_adicity(),
            });
        }
        Ok(())
    }

    /// Reduces an arbitrary integer into canonical form.
    pub fn element(&self, value: impl Into<BigUint>) -> BigUint {
        value.into() % &self.modulus
    }

    /// Returns `true` if `value` is a canonical representative.
    pub fn is_canonical(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Checks that every element of `values` is canonical.
    pub fn ensure_canonical(&self, values: &[BigUint]) -> NttResult<()> {
        match values.iter().position(|value| !self.is_canonical(value)) {
            Some(index) => Err(NttError::NonCanonicalElement { index }),
            None => Ok(()),
        }
    }

    /// Additive identity.
    pub fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    /// Multiplicative identity.
    pub fn one(&self) -> BigUint {
        BigUint::one()
    }

    /// Adds two canonical elements.
    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let sum = lhs + rhs;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    /// Subtracts `rhs` from `lhs`, both canonical.
    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.modulus - rhs + lhs
        }
    }

    /// Multiplies two elements.
    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.modulus
    }

    /// Squares an element.
    pub fn square(&self, value: &BigUint) -> BigUint {
        self.mul(value, value)
    }

    /// Raises `base` to an arbitrary-precision exponent by square-and-multiply.
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Raises `base` to a machine-word exponent.
    pub fn pow_u64(&self, base: &BigUint, exponent: u64) -> BigUint {
        self.pow(base, &BigUint::from(exponent))
    }
}
