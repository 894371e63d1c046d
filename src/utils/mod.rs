//! Utility helpers for the `radix2-ntt` crate.
//! Includes injectable randomness and the optional fork-join switch.

pub mod parallel;
pub mod randomness;

pub use parallel::{join_halves, parallelism_enabled, set_parallelism, ParallelismGuard};
pub use randomness::{deterministic_rng, entropy_rng, DeterministicRng};
