//! Injectable randomness sources.
//!
//! Every random choice in the crate (root candidates, verifier sample
//! positions, demo polynomials) draws from a caller-supplied [`rand::Rng`].
//! This module provides the two generators the crate itself hands out:
//!
//! * [`deterministic_rng`] derives a ChaCha20 stream from a domain label and a
//!   counter through a keyed BLAKE3 hash, so two runs with the same label and
//!   counter observe identical draws,
//! * [`entropy_rng`] seeds the same generator from operating-system entropy.

use blake3::Hasher;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Generator type returned by the helpers in this module.
pub type DeterministicRng = ChaCha20Rng;

const SEED_DERIVATION_KEY: [u8; 32] = {
    let seed = *b"RADIX2-NTT-RNG/V1";
    let mut key = [0u8; 32];
    let mut i = 0;
    while i < seed.len() {
        key[i] = seed[i];
        i += 1;
    }
    key
};

/// Derives the 32-byte ChaCha seed bound to `label` and `counter`.
pub fn derive_seed(label: &str, counter: u64) -> [u8; 32] {
    let mut hasher = Hasher::new_keyed(&SEED_DERIVATION_KEY);
    hasher.update(&(label.len() as u64).to_le_bytes());
    hasher.update(label.as_bytes());
    hasher.update(&counter.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Returns a reproducible generator for the given domain label and counter.
pub fn deterministic_rng(label: &str, counter: u64) -> DeterministicRng {
    ChaCha20Rng::from_seed(derive_seed(label, counter))
}

/// Returns a generator seeded from operating-system entropy.
pub fn entropy_rng() -> DeterministicRng {
    ChaCha20Rng::from_entropy()
}
