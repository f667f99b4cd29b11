//! Random source handle owned by each generator.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::global::with_shared_rng;

/// Where a generator draws its randomness from.
///
/// A source starts out [`Shared`](RandomSource::Shared) and becomes
/// [`Private`](RandomSource::Private) the first time its owner is seeded, so
/// seeding one generator never disturbs siblings still on the shared source.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// Draws from the process-wide source in [`crate::global`].
    #[default]
    Shared,
    /// Draws from an RNG owned by this handle.
    Private(RefCell<StdRng>),
}

impl RandomSource {
    /// A private source seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        RandomSource::Private(RefCell::new(StdRng::seed_from_u64(seed)))
    }

    /// Returns true for a privatized source.
    pub fn is_private(&self) -> bool {
        matches!(self, RandomSource::Private(_))
    }

    /// Seed this source, privatizing it first if it is shared.
    pub fn seed(&mut self, seed: u64) {
        match self {
            RandomSource::Shared => *self = RandomSource::seeded(seed),
            RandomSource::Private(rng) => *rng.get_mut() = StdRng::seed_from_u64(seed),
        }
    }

    /// Run `f` with exclusive access to the underlying RNG.
    ///
    /// `f` must not call back into the generator that owns this source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        match self {
            RandomSource::Shared => with_shared_rng(f),
            RandomSource::Private(rng) => f(&mut rng.borrow_mut()),
        }
    }

    /// Uniform integer in `[low, high]`.
    pub fn int_in(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.with_rng(|rng| rng.random_range(low..=high))
    }

    /// Uniform index in `[0, len)`; `len` must be non-zero.
    pub fn index(&self, len: usize) -> usize {
        self.with_rng(|rng| rng.random_range(0..len))
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    /// Fill `buf` with random bytes.
    pub fn fill_bytes(&self, buf: &mut [u8]) {
        self.with_rng(|rng| rng.fill(buf));
    }
}
