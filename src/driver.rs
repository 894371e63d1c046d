//! End-to-end run used by the `ntt-demo` binary: sample a root, transform a
//! random zero-padded polynomial and spot-check the result, timing each phase.

use std::time::{Duration, Instant};

use num_bigint::BigUint;
use rand::Rng;
use tracing::info;

use crate::config::DemoConfig;
use crate::fft::{plan, Fft, Radix2Domain};
use crate::field::Polynomial;
use crate::NttResult;

/// Outcome of a successful demo run.
#[derive(Debug, Clone)]
pub struct DriverReport {
    /// Transform size.
    pub size: usize,
    /// Number of non-padding coefficients in the random polynomial.
    pub terms: usize,
    /// Sampled root of unity.
    pub root: BigUint,
    /// Engine identifier.
    pub engine: &'static str,
    /// Time spent sampling the root.
    pub root_time: Duration,
    /// Time spent in the forward transform.
    pub transform_time: Duration,
    /// Time spent verifying.
    pub verify_time: Duration,
    /// Probability that the verifier would catch a single wrong entry.
    pub detection_probability: f64,
}

/// Executes the demo pipeline described by `config`, drawing every random
/// choice from `rng`.
pub fn run_demo<R: Rng + ?Sized>(config: &DemoConfig, rng: &mut R) -> NttResult<DriverReport> {
    config.validate()?;
    let field = config.ntt.field.field();
    let size = config.ntt.size()?;

    let polynomial = Polynomial::random(&field, rng, config.max_terms);
    let coefficients = polynomial.padded_to(size)?;

    let started = Instant::now();
    let domain = Radix2Domain::sample(field.clone(), size, rng)?;
    let root_time = started.elapsed();
    info!(root = %domain.root(), elapsed = ?root_time, "sampled root of unity");

    let transform = plan(domain, config.ntt.engine, config.ntt.twiddles);
    let started = Instant::now();
    let evaluations = transform.forward(&coefficients)?;
    let transform_time = started.elapsed();
    info!(
        size,
        engine = transform.name(),
        elapsed = ?transform_time,
        "transform completed"
    );

    let verifier = config.ntt.verifier;
    let started = Instant::now();
    verifier.verify(
        &field,
        &coefficients,
        transform.domain().root(),
        &evaluations,
        rng,
    )?;
    let verify_time = started.elapsed();
    info!(elapsed = ?verify_time, mode = ?verifier.mode, "verification passed");

    Ok(DriverReport {
        size,
        terms: polynomial.len(),
        root: transform.domain().root().clone(),
        engine: transform.name(),
        root_time,
        transform_time,
        verify_time,
        detection_probability: verifier.detection_probability(size),
    })
}
