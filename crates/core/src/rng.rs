//! RNG module - seeded randomness for dealing
//!
//! Wraps a ChaCha8 stream so every deal is reproducible from a `u64` seed.
//! The shuffle is a plain Fisher-Yates over [`GameRng::next_range`], which
//! keeps the permutation uniform and easy to reason about in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for deck generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    pub fn next_range(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..max)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range(i + 1);
            slice.swap(i, j);
        }
    }
}
