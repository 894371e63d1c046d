//! Radix-2 number-theoretic transforms over a [`PrimeField`].
//!
//! A transform of size `n` evaluates a polynomial with `n` coefficients at
//! `ω^0, ω^1, …, ω^(n-1)` where `ω` has multiplicative order exactly `n`.
//! Two engines are provided and always agree on valid input:
//!
//! * [`RecursiveNtt`], the decimation-in-time reference that splits the
//!   coefficients by index parity and recombines with `ω^j` twiddles,
//! * [`IterativeNtt`], an in-place bit-reversal variant with incremental
//!   twiddles for large domains.
//!
//! Inputs are validated once at the plan boundary ([`Radix2Domain::new`] and
//! [`Fft::forward`]); the inner butterflies assume canonical data.

use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::field::PrimeField;
use crate::{NttError, NttResult};

pub mod iterative;
pub mod recursive;
pub mod roots;

pub use iterative::IterativeNtt;
pub use recursive::RecursiveNtt;

/// How the recursive engine obtains the twiddle `ω^j` for output position `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TwiddleStrategy {
    /// Recompute `ω^j` by modular exponentiation for every output,
    /// `O(n log² n)` multiplications overall.
    Exponentiate,
    /// Keep a running product updated by one multiplication per output,
    /// `O(n log n)` multiplications overall.
    #[default]
    Incremental,
}

/// Transform engine selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NttEngine {
    /// Recursive decimation-in-time over index parity.
    #[default]
    Recursive,
    /// In-place bit-reversal followed by iterative butterfly passes.
    Iterative,
}

impl NttEngine {
    /// Short identifier used in logs and benchmarks.
    pub fn name(&self) -> &'static str {
        match self {
            NttEngine::Recursive => "recursive",
            NttEngine::Iterative => "iterative",
        }
    }
}

/// Evaluation domain `{ω^j : 0 ≤ j < n}` over a prime field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radix2Domain {
    field: PrimeField,
    size: usize,
    root: BigUint,
}

impl Radix2Domain {
    /// Builds a domain of `size` points generated by `root`.
    ///
    /// `size` must be a power of two and `root` a canonical element of exact
    /// multiplicative order `size`.  For `size == 1` any canonical root is
    /// accepted since the single evaluation does not depend on it.
    pub fn new(field: PrimeField, size: usize, root: BigUint) -> NttResult<Self> {
        if !size.is_power_of_two() {
            return Err(NttError::SizeNotPowerOfTwo { size });
        }
        if !field.is_canonical(&root) {
            return Err(NttError::NonCanonicalRoot);
        }
        if size > 1 && !roots::has_exact_order(&field, &root, size) {
            return Err(NttError::RootOrderMismatch { size });
        }
        Ok(Self { field, size, root })
    }

    /// Builds a domain around a freshly sampled root of order `size`.
    pub fn sample<R: Rng + ?Sized>(field: PrimeField, size: usize, rng: &mut R) -> NttResult<Self> {
        let root = roots::sample_root(&field, size, rng)?;
        Ok(Self { field, size, root })
    }

    /// Field the domain lives in.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Number of points in the domain.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `log2(size)`.
    pub fn log2_size(&self) -> u32 {
        self.size.trailing_zeros()
    }

    /// Generator of the domain.
    pub fn root(&self) -> &BigUint {
        &self.root
    }

    /// Returns the `index`-th domain point `ω^index`.
    pub fn element(&self, index: usize) -> BigUint {
        self.field.pow_u64(&self.root, index as u64)
    }

    /// Iterates the domain points in natural order.
    pub fn elements(&self) -> impl Iterator<Item = BigUint> + '_ {
        let mut current = BigUint::one();
        (0..self.size).map(move |_| {
            let next = self.field.mul(&current, &self.root);
            core::mem::replace(&mut current, next)
        })
    }

    /// Checks that `coefficients` fits the domain and is canonical.
    pub fn check_input(&self, coefficients: &[BigUint]) -> NttResult<()> {
        if coefficients.len() != self.size {
            return Err(NttError::LengthMismatch {
                expected: self.size,
                got: coefficients.len(),
            });
        }
        self.field.ensure_canonical(coefficients)
    }
}

/// Trait implemented by forward transform engines.
pub trait Fft {
    /// Evaluation domain the plan was built for.
    fn domain(&self) -> &Radix2Domain;

    /// Short identifier used in logs and benchmarks.
    fn name(&self) -> &'static str;

    /// Evaluates `coefficients` at every domain point in natural order.
    fn forward(&self, coefficients: &[BigUint]) -> NttResult<Vec<BigUint>>;
}

/// Builds a boxed transform plan for the selected engine.
///
/// The twiddle strategy only affects the recursive engine; the iterative
/// engine always updates twiddles incrementally.
pub fn plan(domain: Radix2Domain, engine: NttEngine, twiddles: TwiddleStrategy) -> Box<dyn Fft> {
    match engine {
        NttEngine::Recursive => Box::new(RecursiveNtt::new(domain, twiddles)),
        NttEngine::Iterative => Box::new(IterativeNtt::new(domain)),
    }
}

/// Evaluates `coefficients` at `root^j` for every `j` in `[0, size)`.
///
/// Runs the recursive engine with incremental twiddles.  Fails before any
/// arithmetic if `size` is not a power of two, the coefficient count differs
/// from `size`, an input is not reduced modulo `p`, or `root` does not have
/// order exactly `size`.
pub fn ntt(
    size: usize,
    coefficients: &[BigUint],
    root: &BigUint,
    field: &PrimeField,
) -> NttResult<Vec<BigUint>> {
    let domain = Radix2Domain::new(field.clone(), size, root.clone())?;
    RecursiveNtt::new(domain, TwiddleStrategy::Incremental).forward(coefficients)
}
