use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::{Polynomial, PrimeField};
use crate::NttError;

fn big(values: &[u64]) -> Vec<BigUint> {
    values.iter().copied().map(BigUint::from).collect()
}

#[test]
fn add_sub_mul_laws_ok() {
    let field = PrimeField::from_u64(17).expect("valid modulus");
    let a = BigUint::from(5u8);
    let b = BigUint::from(7u8);
    let nine = BigUint::from(9u8);

    assert_eq!(field.add(&a, &b), BigUint::from(12u8));
    assert_eq!(field.add(&nine, &nine), BigUint::from(1u8));
    assert_eq!(field.sub(&a, &b), BigUint::from(15u8));
    assert_eq!(field.sub(&b, &a), BigUint::from(2u8));
    assert_eq!(field.mul(&a, &b), BigUint::from(1u8));
    assert_eq!(field.square(&nine), BigUint::from(13u8));
}

#[test]
fn pow_fermat_identity_ok() {
    let field = PrimeField::bls12_381_scalar();
    let element = field.element(19u64);
    assert_eq!(field.pow(&element, &field.group_order()), field.one());
    assert_eq!(field.pow_u64(&element, 0), field.one());
    assert_eq!(field.pow_u64(&element, 2), BigUint::from(361u32));
}

#[test]
fn two_adicity_of_known_fields() {
    assert_eq!(PrimeField::from_u64(17).expect("valid").two_adicity(), 4);
    assert_eq!(PrimeField::bls12_381_scalar().two_adicity(), 32);
    assert_eq!(PrimeField::goldilocks().two_adicity(), 32);
    assert_eq!(PrimeField::from_u64(2).expect("valid").two_adicity(), 0);
}

#[test]
fn ensure_domain_rejects_bad_sizes() {
    let field = PrimeField::from_u64(17).expect("valid modulus");
    assert!(field.ensure_domain(1).is_ok());
    assert!(field.ensure_domain(16).is_ok());
    assert_eq!(
        field.ensure_domain(12),
        Err(NttError::SizeNotPowerOfTwo { size: 12 })
    );
    assert_eq!(
        field.ensure_domain(0),
        Err(NttError::SizeNotPowerOfTwo { size: 0 })
    );
    assert_eq!(
        field.ensure_domain(32),
        Err(NttError::UnsupportedDomain {
            size: 32,
            two_adicity: 4
        })
    );
}

#[test]
fn reject_degenerate_modulus_err() {
    let err = PrimeField::from_u64(1).expect_err("modulus one has no field");
    assert_eq!(err.to_string(), "invalid modulus: modulus must be at least 2");
    let err = PrimeField::from_hex("0xzz").expect_err("not hexadecimal");
    assert_eq!(
        err,
        NttError::InvalidModulus {
            reason: "modulus is not valid hexadecimal"
        }
    );
}

#[test]
fn hex_parsing_matches_builtin_profile() {
    let parsed = PrimeField::from_hex(
        "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
    )
    .expect("valid modulus");
    assert_eq!(parsed, PrimeField::bls12_381_scalar());
    assert_eq!(parsed.modulus().bits(), 255);
}

#[test]
fn ensure_canonical_reports_first_offender() {
    let field = PrimeField::from_u64(17).expect("valid modulus");
    assert!(field.ensure_canonical(&big(&[0, 16, 3])).is_ok());
    assert_eq!(
        field.ensure_canonical(&big(&[0, 17, 40])),
        Err(NttError::NonCanonicalElement { index: 1 })
    );
}

#[test]
fn horner_evaluation_ok() {
    let field = PrimeField::from_u64(17).expect("valid modulus");
    let poly = Polynomial::new(big(&[1, 2, 3, 4]));
    assert_eq!(poly.evaluate(&field, &BigUint::from(1u8)), BigUint::from(10u8));
    assert_eq!(poly.evaluate(&field, &BigUint::from(4u8)), BigUint::from(7u8));
    assert_eq!(poly.evaluate(&field, &BigUint::from(16u8)), BigUint::from(15u8));
    assert_eq!(poly.evaluate(&field, &BigUint::from(13u8)), BigUint::from(6u8));
}

#[test]
fn degree_ignores_trailing_zeros() {
    assert_eq!(Polynomial::new(big(&[1, 0, 0])).degree(), Some(0));
    assert_eq!(Polynomial::new(big(&[0, 0, 5, 0])).degree(), Some(2));
    assert_eq!(Polynomial::new(big(&[0, 0])).degree(), None);
    assert_eq!(Polynomial::default().degree(), None);
}

#[test]
fn padding_to_transform_size() {
    let poly = Polynomial::new(big(&[3, 1]));
    assert_eq!(poly.padded_to(4).expect("fits"), big(&[3, 1, 0, 0]));
    assert_eq!(
        poly.padded_to(1),
        Err(NttError::PolynomialTooLong { terms: 2, size: 1 })
    );
}

#[test]
fn random_polynomial_respects_bounds() {
    let field = PrimeField::bls12_381_scalar();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..32 {
        let poly = Polynomial::random(&field, &mut rng, 50);
        assert!((1..=50).contains(&poly.len()));
        for (index, coeff) in poly.coefficients.iter().enumerate() {
            assert!(coeff <= &BigUint::from(index));
        }
    }
    let single = Polynomial::random(&field, &mut rng, 0);
    assert_eq!(single.coefficients, big(&[0]));
}
