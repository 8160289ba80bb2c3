//! Deterministic simulation-level RNG wrapper.
//!
//! The tick loop itself is fully deterministic and never draws random
//! numbers.  `SimRng` exists for the synthetic roster generator and any other
//! tooling that needs reproducible randomness: the same seed always yields
//! the same sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for single-threaded use.
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

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
