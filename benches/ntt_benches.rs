use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigUint, RandBigInt};
use radix2_ntt::fft::{plan, Fft, NttEngine, Radix2Domain, TwiddleStrategy};
use radix2_ntt::field::PrimeField;
use radix2_ntt::utils::deterministic_rng;
use radix2_ntt::verify::EvaluationVerifier;

const PLANS: [(NttEngine, TwiddleStrategy); 3] = [
    (NttEngine::Recursive, TwiddleStrategy::Exponentiate),
    (NttEngine::Recursive, TwiddleStrategy::Incremental),
    (NttEngine::Iterative, TwiddleStrategy::Incremental),
];

fn fixture(field: &PrimeField, log2_size: u32) -> (Radix2Domain, Vec<BigUint>) {
    let size = 1usize << log2_size;
    let mut rng = deterministic_rng("bench", u64::from(log2_size));
    let domain = Radix2Domain::sample(field.clone(), size, &mut rng).expect("supported size");
    let coefficients = (0..size)
        .map(|_| rng.gen_biguint_below(field.modulus()))
        .collect();
    (domain, coefficients)
}

fn bench_forward(c: &mut Criterion) {
    let field = PrimeField::bls12_381_scalar();
    let mut group = c.benchmark_group("ntt_forward_bls12_381");
    group.sample_size(10);
    for log2_size in [8u32, 10, 12] {
        let (domain, coefficients) = fixture(&field, log2_size);
        for (engine, twiddles) in PLANS {
            let transform = plan(domain.clone(), engine, twiddles);
            group.bench_with_input(
                BenchmarkId::new(transform.name(), 1usize << log2_size),
                &coefficients,
                |b, coefficients| {
                    b.iter(|| black_box(transform.forward(black_box(coefficients))));
                },
            );
        }
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let field = PrimeField::bls12_381_scalar();
    let (domain, coefficients) = fixture(&field, 10);
    let evaluations = plan(domain.clone(), NttEngine::Iterative, TwiddleStrategy::Incremental)
        .forward(&coefficients)
        .expect("valid input");
    let verifier = EvaluationVerifier::default();
    let mut group = c.benchmark_group("verify_bls12_381");
    group.sample_size(10);
    group.bench_function("sampled_100_of_1024", |b| {
        let mut rng = deterministic_rng("bench-verify", 0);
        b.iter(|| {
            black_box(verifier.verify(
                &field,
                &coefficients,
                domain.root(),
                &evaluations,
                &mut rng,
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_forward, bench_verify);
criterion_main!(benches);
