//! Configuration profiles for transform runs.
//!
//! The types here are plain serde-derivable records.  They name a field, a
//! transform size, the engine and the verification policy; [`NttConfig::validate`]
//! checks them against the chosen field before any work is scheduled.
//!
//! [`DEMO_CONFIG`] runs over the BLS12-381 scalar field with `n = 2^17`,
//! random polynomials of at most 1000 terms and 100 verified points.

use serde::{Deserialize, Serialize};

use crate::fft::{NttEngine, TwiddleStrategy};
use crate::field::PrimeField;
use crate::verify::{EvaluationVerifier, VerificationMode, DEFAULT_SAMPLE_COUNT};
use crate::{NttError, NttResult};

/// Maximum supported radix-2 domain size expressed as `log2(n)`.
pub const MAX_LOG2_SIZE: u32 = 32;

/// Named prime fields understood by the configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldProfile {
    /// Scalar field of BLS12-381 (two-adicity 32).
    Bls12_381Scalar,
    /// Goldilocks `2^64 - 2^32 + 1` (two-adicity 32).
    Goldilocks,
    /// `p = 17` (two-adicity 4), handy for hand-checked examples.
    Toy17,
}

impl FieldProfile {
    /// Instantiates the field descriptor.
    pub fn field(&self) -> PrimeField {
        match self {
            FieldProfile::Bls12_381Scalar => PrimeField::bls12_381_scalar(),
            FieldProfile::Goldilocks => PrimeField::goldilocks(),
            FieldProfile::Toy17 => PrimeField::from_u64(17).expect("17 is a valid modulus"),
        }
    }

    /// Human readable identifier.
    pub fn name(&self) -> &'static str {
        match self {
            FieldProfile::Bls12_381Scalar => "bls12-381-scalar",
            FieldProfile::Goldilocks => "goldilocks",
            FieldProfile::Toy17 => "toy-17",
        }
    }
}

/// Parameters of a single transform run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NttConfig {
    /// Field the transform runs over.
    pub field: FieldProfile,
    /// Transform size as `log2(n)`.
    pub log2_size: u32,
    /// Engine used for the forward transform.
    pub engine: NttEngine,
    /// Twiddle strategy for the recursive engine.
    pub twiddles: TwiddleStrategy,
    /// Post-transform verification policy.
    pub verifier: EvaluationVerifier,
}

impl NttConfig {
    /// Transform size `n = 2^log2_size`.
    ///
    /// Fails instead of overflowing when `log2_size` exceeds
    /// [`MAX_LOG2_SIZE`] or the platform word size.
    pub fn size(&self) -> NttResult<usize> {
        if self.log2_size > MAX_LOG2_SIZE {
            return Err(NttError::InvalidConfig {
                reason: "log2 size exceeds supported maximum",
            });
        }
        1usize
            .checked_shl(self.log2_size)
            .ok_or(NttError::InvalidConfig {
                reason: "log2 size exceeds the platform word size",
            })
    }

    /// Checks the configuration against the field it names.
    pub fn validate(&self) -> NttResult<()> {
        self.size()?;
        if u64::from(self.log2_size) > self.field.field().two_adicity() {
            return Err(NttError::InvalidConfig {
                reason: "log2 size exceeds the two-adicity of the field",
            });
        }
        if self.verifier.mode == VerificationMode::Sampled && self.verifier.sample_count == 0 {
            return Err(NttError::InvalidConfig {
                reason: "sampled verification needs at least one sample",
            });
        }
        Ok(())
    }
}

/// Parameters of the demo driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Transform parameters.
    pub ntt: NttConfig,
    /// Upper bound on the number of random polynomial terms.
    pub max_terms: usize,
    /// Seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl DemoConfig {
    /// Checks the transform parameters and that the polynomial fits.
    pub fn validate(&self) -> NttResult<()> {
        self.ntt.validate()?;
        if self.max_terms == 0 {
            return Err(NttError::InvalidConfig {
                reason: "max_terms must be at least 1",
            });
        }
        if self.max_terms > self.ntt.size()? {
            return Err(NttError::InvalidConfig {
                reason: "max_terms exceeds the transform size",
            });
        }
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DEMO_CONFIG
    }
}

/// Default demo profile.
pub const DEMO_CONFIG: DemoConfig = DemoConfig {
    ntt: NttConfig {
        field: FieldProfile::Bls12_381Scalar,
        log2_size: 17,
        engine: NttEngine::Recursive,
        twiddles: TwiddleStrategy::Incremental,
        verifier: EvaluationVerifier::sampled(DEFAULT_SAMPLE_COUNT),
    },
    max_terms: 1000,
    seed: None,
};
