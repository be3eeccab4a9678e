//! Injectable randomness.
//!
//! The game never calls a global generator. Every draw goes through
//! [`Randomness`], so tests can script outcomes and sessions can be replayed
//! from a seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random draws.
pub trait Randomness {
    /// Returns a uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Returns a uniform value in `[0.0, 1.0)`.
    fn unit(&mut self) -> f64;
}

/// Seeded ChaCha8 randomness.
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Randomness for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }

    fn unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}
