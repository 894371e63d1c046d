use std::env;
use std::process::ExitCode;

use radix2_ntt::config::{DemoConfig, FieldProfile, DEMO_CONFIG};
use radix2_ntt::driver::run_demo;
use radix2_ntt::fft::{NttEngine, TwiddleStrategy};
use radix2_ntt::utils::{deterministic_rng, entropy_rng};
use radix2_ntt::verify::EvaluationVerifier;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: ntt-demo [--log2-size N] [--max-terms N] [--samples N] \
[--exhaustive] [--seed N] [--engine recursive|iterative] \
[--twiddles incremental|exponentiate] [--field bls12-381|goldilocks|toy-17]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(arg) => {
            eprintln!("unrecognised or incomplete argument {arg:?}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut rng = match config.seed {
        Some(seed) => deterministic_rng("ntt-demo", seed),
        None => entropy_rng(),
    };

    info!(
        field = config.ntt.field.name(),
        log2_size = config.ntt.log2_size,
        max_terms = config.max_terms,
        "starting demo run"
    );
    match run_demo(&config, &mut rng) {
        Ok(report) => {
            info!(
                size = report.size,
                terms = report.terms,
                engine = report.engine,
                root_ms = report.root_time.as_secs_f64() * 1e3,
                transform_ms = report.transform_time.as_secs_f64() * 1e3,
                verify_ms = report.verify_time.as_secs_f64() * 1e3,
                detection_probability = report.detection_probability,
                "demo run succeeded"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "demo run failed");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<DemoConfig, String> {
    let mut config = DEMO_CONFIG;
    while let Some(arg) = args.next() {
        let missing = || arg.clone();
        match arg.as_str() {
            "--log2-size" => config.ntt.log2_size = next_number(&mut args).ok_or_else(missing)?,
            "--max-terms" => config.max_terms = next_number(&mut args).ok_or_else(missing)?,
            "--samples" => {
                let samples = next_number(&mut args).ok_or_else(missing)?;
                config.ntt.verifier = EvaluationVerifier::sampled(samples);
            }
            "--exhaustive" => config.ntt.verifier = EvaluationVerifier::exhaustive(),
            "--seed" => config.seed = Some(next_number(&mut args).ok_or_else(missing)?),
            "--engine" => {
                config.ntt.engine = match args.next().as_deref() {
                    Some("recursive") => NttEngine::Recursive,
                    Some("iterative") => NttEngine::Iterative,
                    _ => return Err(missing()),
                }
            }
            "--twiddles" => {
                config.ntt.twiddles = match args.next().as_deref() {
                    Some("incremental") => TwiddleStrategy::Incremental,
                    Some("exponentiate") => TwiddleStrategy::Exponentiate,
                    _ => return Err(missing()),
                }
            }
            "--field" => {
                config.ntt.field = match args.next().as_deref() {
                    Some("bls12-381") => FieldProfile::Bls12_381Scalar,
                    Some("goldilocks") => FieldProfile::Goldilocks,
                    Some("toy-17") => FieldProfile::Toy17,
                    _ => return Err(missing()),
                }
            }
            _ => return Err(missing()),
        }
    }
    Ok(config)
}

fn next_number<T: std::str::FromStr>(args: &mut impl Iterator<Item = String>) -> Option<T> {
    args.next().and_then(|value| value.parse().ok())
}
