//! Process-wide random source shared by generators that were never seeded
//! individually.
//!
//! Every [`Generator`](crate::Generator) starts out drawing from this source.
//! Seeding it through [`Generator::seed`](crate::Generator::seed) makes all
//! of those generators reproducible at once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;

static SHARED_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

static SEEDED: AtomicBool = AtomicBool::new(false);

/// Provides exclusive access to the shared random source.
///
/// The closure must not call back into a generator; the lock is held while
/// it runs.
pub fn with_shared_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    let mut guard = SHARED_RNG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Reseeds the shared random source and records that seeding happened.
pub fn seed_shared(seed: u64) {
    with_shared_rng(|rng| *rng = StdRng::seed_from_u64(seed));
    SEEDED.store(true, Ordering::SeqCst);
}

/// Returns true once [`seed_shared`] has been called in this process.
pub fn shared_is_seeded() -> bool {
    SEEDED.load(Ordering::SeqCst)
}
