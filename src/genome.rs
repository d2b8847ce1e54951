//! # Genome Trait
//!
//! The `Genome` trait defines the interface for candidate solutions evolved by
//! the engine. A genome can score itself, combine with another genome of the
//! same type, and produce a mutated copy of itself.
//!
//! Fitness is minimized: lower values are better.
//!
//! ## Example
//!
//! ```rust
//! use genopt::genome::Genome;
//! use genopt::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Point {
//!     x: f64,
//! }
//!
//! impl Genome for Point {
//!     fn fitness(&self) -> f64 {
//!         self.x * self.x
//!     }
//!
//!     fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
//!         let t = rng.uniform(0.0, 1.0);
//!         Point { x: self.x + t * (other.x - self.x) }
//!     }
//!
//!     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
//!         Point { x: self.x + rng.uniform(-0.5, 0.5) }
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let a = Point { x: 2.0 };
//! let b = Point { x: -2.0 };
//! let child = a.crossover(&b, &mut rng);
//! assert!(child.x >= -2.0 && child.x <= 2.0);
//! assert_eq!(a.x, 2.0);
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent candidate solutions in the genetic algorithm.
///
/// Genomes are immutable from the engine's point of view: every operator
/// borrows its inputs and returns a new value. Randomness is drawn from the
/// generator passed in by the engine, so a seeded run reproduces the exact
/// same genomes.
pub trait Genome: Clone + Debug {
    /// Returns the objective value of this genome. Lower is better.
    ///
    /// The engine does not require the value to be finite. Non-finite values
    /// are ranked as worst by the selection strategies.
    fn fitness(&self) -> f64;

    /// Combines this genome with `other` into a new offspring.
    ///
    /// Neither parent may be modified.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self;

    /// Returns a perturbed copy of this genome.
    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self;
}
