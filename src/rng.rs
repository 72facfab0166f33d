//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single injectable source of
//! randomness for selection, crossover, mutation and population seeding.
//! Seeding it makes an entire evolutionary run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use foox::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::from_seed(7);
//! let mut b = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// engine needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns `true` with probability `probability`.
    ///
    /// `0.0` never succeeds and `1.0` always does.
    ///
    /// # Panics
    ///
    /// Panics if `probability` lies outside `[0, 1]`. Callers validate
    /// rates through `MutationSettings` before they get here.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    /// Draws a uniform index in `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws a uniform point in `[0, max]`, both ends included.
    pub fn gen_point(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..=max)
    }

    /// Draws a uniform value in `[0, upper)`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is not strictly positive.
    pub fn gen_below(&mut self, upper: f64) -> f64 {
        self.rng.gen_range(0.0..upper)
    }

    /// Picks one element of `items` uniformly, or `None` when it is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
