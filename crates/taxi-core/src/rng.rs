//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The world owns exactly one `SimRng`, seeded from `SimConfig::seed`, and
//! lends it by `&mut` to every randomised decision in a fixed order: client
//! spawning, agent placement, Donkey mode arbitration, and the roam shuffle.
//! Agents are ticked sequentially, so the same seed always reproduces the same
//! run.  There is no global singleton.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The shared simulation random source.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
