//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source of an
//! evolutionary run. It wraps the `rand` crate's `StdRng`, so a run can be
//! seeded and reproduced exactly.
//!
//! ## Example
//!
//! ```rust
//! use genopt::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in random_numbers {
//!     assert!((0.0..1.0).contains(&number));
//! }
//! ```

use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// engine and genome implementations need.
///
/// The inner `rng` is public so genome implementations can use the full
/// `rand::Rng` API while still drawing from the run's source.
#[derive(Debug, Clone)]
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
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator from an optional seed, falling back to entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }

    /// Draws a single value uniformly from `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= to` or either bound is not finite.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Draws an index uniformly from `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Draws an index uniformly from `0..=upper`.
    pub fn index_inclusive(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }

    /// Returns `true` with probability `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` lies outside `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p)
    }

    /// Draws `amount` distinct indices uniformly from `0..length`.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`.
    pub fn distinct_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fetch_uniform_with_positive_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(result.len(), 5);
        for &num in result.iter() {
            assert!((0.0..1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_negative_range() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(-20.0, 20.0, 10);

        assert_eq!(result.len(), 10);
        for &num in result.iter() {
            assert!((-20.0..20.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        assert!(rng.fetch_uniform(1.0, 2.0, 0).is_empty());
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_optional_seed(Some(42));

        assert_eq!(rng1.fetch_uniform(0.0, 1.0, 5), rng2.fetch_uniform(0.0, 1.0, 5));
        assert_eq!(rng1.index(1000), rng2.index(1000));
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        assert_eq!(rng1.fetch_uniform(0.0, 1.0, 5), rng2.fetch_uniform(0.0, 1.0, 5));
    }

    #[test]
    fn test_index_bounds() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..100 {
            assert!(rng.index(4) < 4);
            assert!(rng.index_inclusive(4) <= 4);
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_distinct_indices() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        for _ in 0..50 {
            let picked = rng.distinct_indices(8, 5);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<usize> = picked.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|&i| i < 8));
        }
    }
}
