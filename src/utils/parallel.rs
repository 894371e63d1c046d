//! Runtime switch for the optional `parallel` feature.
//!
//! Without the feature every helper here runs sequentially and the switch is
//! inert.  With it, transforms fork onto the rayon pool unless a
//! [`ParallelismGuard`] obtained from [`set_parallelism`] says otherwise.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static PARALLEL_ENABLED: AtomicBool = AtomicBool::new(true);

/// Smallest sub-transform size that is still forked onto the thread pool.
pub const PARALLEL_MIN_SIZE: usize = 1 << 10;

/// Returns `true` when transforms may fork onto the rayon pool.
#[cfg(feature = "parallel")]
pub fn parallelism_enabled() -> bool {
    PARALLEL_ENABLED.load(Ordering::SeqCst)
}

/// Always `false` when the crate is built without the `parallel` feature.
#[cfg(not(feature = "parallel"))]
pub fn parallelism_enabled() -> bool {
    false
}

/// Switches forking on or off until the returned guard is dropped.
///
/// The switch is process wide, so concurrent callers observe each other's
/// setting; results are identical either way.
#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = PARALLEL_ENABLED.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

/// No-op without the `parallel` feature.
#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

/// Scoped parallelism setting returned by [`set_parallelism`]; the previous
/// setting is restored on drop.
#[must_use = "parallelism reverts when the guard is dropped"]
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        PARALLEL_ENABLED.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(not(feature = "parallel"))]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {}
}

/// Runs both closures and returns their results, forking onto the rayon pool
/// when parallelism is enabled and `size` reaches [`PARALLEL_MIN_SIZE`].
pub fn join_halves<A, B, RA, RB>(size: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    if size >= PARALLEL_MIN_SIZE && parallelism_enabled() {
        return rayon::join(left, right);
    }
    #[cfg(not(feature = "parallel"))]
    let _ = size;
    (left(), right())
}
