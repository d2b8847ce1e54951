//! # GaSettings
//!
//! The `GaSettings` struct holds the configuration of a genetic algorithm run:
//! mutation rate, elitism, generation budget, selection strategy and
//! bookkeeping options.
//!
//! Settings are validated once when a run starts and are read-only after
//! that. [`GaSettings::verify`] checks the settings on their own.
//! [`GaSettings::verify_for_population`] checks them against the population
//! they are about to be applied to.
//!
//! ## Example
//!
//! ```rust
//! use genopt::evolution::{GaSettings, Selection};
//!
//! // Create settings with the builder
//! let settings = GaSettings::builder()
//!     .mutation_rate(0.2)
//!     .elitism(2)
//!     .max_iterations(250)
//!     .selection(Selection::Tournament)
//!     .tournament_size(3)
//!     .build();
//! assert!(settings.verify().is_ok());
//!
//! // Tournament selection needs at least two competitors
//! let invalid = GaSettings::builder()
//!     .selection(Selection::Tournament)
//!     .tournament_size(1)
//!     .build();
//! assert!(invalid.verify().is_err());
//! ```

use tracing::debug;

use crate::error::{GeneticError, Result};
use crate::selection::Selection;

/// Configuration of a genetic algorithm run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaSettings {
    /// Probability in `[0, 1]` that a freshly bred offspring is mutated.
    pub mutation_rate: f64,
    /// Number of best candidates copied unchanged into the next generation.
    pub elitism: usize,
    /// Number of generations to run.
    pub max_iterations: usize,
    /// Parent selection strategy.
    pub selection: Selection,
    /// Competitors per tournament. Only read for [`Selection::Tournament`].
    pub tournament_size: usize,
    /// Log progress every `verbose` iterations; `0` disables progress logs.
    pub verbose: usize,
    /// Whether a snapshot of every generation is kept in the result.
    pub keep_intermediate_results: bool,
    /// Seed of the run's random source; `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for GaSettings {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            elitism: 0,
            max_iterations: 100,
            selection: Selection::default(),
            tournament_size: 0,
            verbose: 0,
            keep_intermediate_results: false,
            seed: None,
        }
    }
}

impl GaSettings {
    /// Returns a builder for creating a `GaSettings` instance.
    pub fn builder() -> GaSettingsBuilder {
        GaSettingsBuilder::default()
    }

    /// Checks the settings for internal consistency.
    ///
    /// Every rule is checked on its own, and breaking any one of them rejects
    /// the settings:
    ///
    /// - `mutation_rate` lies in `[0, 1]`,
    /// - `elitism` is non-negative,
    /// - tournament selection uses a `tournament_size` of at least 2.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` naming the first broken rule.
    pub fn verify(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        // `elitism` is unsigned, so the non-negativity rule cannot be broken.

        if self.selection == Selection::Tournament && self.tournament_size < 2 {
            return Err(invalid(format!(
                "Tournament selection requires a tournament size of at least 2, got {}",
                self.tournament_size
            )));
        }

        Ok(())
    }

    /// Checks the settings against a population of `population_size` genomes.
    ///
    /// # Errors
    ///
    /// - `GeneticError::EmptyPopulation` if `population_size` is zero.
    /// - `GeneticError::InvalidConfiguration` if `elitism` exceeds the
    ///   population size, if `max_iterations` is zero, or if a tournament
    ///   needs more competitors than the population holds.
    pub fn verify_for_population(&self, population_size: usize) -> Result<()> {
        if population_size == 0 {
            debug!("rejecting empty population");
            return Err(GeneticError::EmptyPopulation);
        }

        if self.elitism > population_size {
            return Err(invalid(format!(
                "Elitism ({}) cannot exceed the population size ({})",
                self.elitism, population_size
            )));
        }

        if self.max_iterations == 0 {
            return Err(invalid("Maximum iterations must be at least 1".to_string()));
        }

        if self.selection == Selection::Tournament && self.tournament_size > population_size {
            return Err(invalid(format!(
                "Tournament size ({}) cannot exceed the population size ({})",
                self.tournament_size, population_size
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> GeneticError {
    debug!(%message, "settings rejected");
    GeneticError::InvalidConfiguration(message)
}

/// Builder for `GaSettings`.
///
/// Provides a fluent interface for constructing `GaSettings` instances.
/// Unset fields take the values of `GaSettings::default()`.
#[derive(Debug, Clone, Default)]
pub struct GaSettingsBuilder {
    mutation_rate: Option<f64>,
    elitism: Option<usize>,
    max_iterations: Option<usize>,
    selection: Option<Selection>,
    tournament_size: Option<usize>,
    verbose: Option<usize>,
    keep_intermediate_results: Option<bool>,
    seed: Option<u64>,
}

impl GaSettingsBuilder {
    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the number of elites.
    pub fn elitism(mut self, value: usize) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    /// Sets the selection strategy.
    pub fn selection(mut self, value: Selection) -> Self {
        self.selection = Some(value);
        self
    }

    /// Sets the tournament size.
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Sets the progress logging interval.
    pub fn verbose(mut self, value: usize) -> Self {
        self.verbose = Some(value);
        self
    }

    /// Sets whether per-generation snapshots are kept.
    pub fn keep_intermediate_results(mut self, value: bool) -> Self {
        self.keep_intermediate_results = Some(value);
        self
    }

    /// Sets the seed of the run's random source.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `GaSettings` instance.
    ///
    /// The result is not validated; call [`GaSettings::verify`] or start a run.
    pub fn build(self) -> GaSettings {
        let default = GaSettings::default();
        GaSettings {
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            elitism: self.elitism.unwrap_or(default.elitism),
            max_iterations: self.max_iterations.unwrap_or(default.max_iterations),
            selection: self.selection.unwrap_or(default.selection),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            verbose: self.verbose.unwrap_or(default.verbose),
            keep_intermediate_results: self
                .keep_intermediate_results
                .unwrap_or(default.keep_intermediate_results),
            seed: self.seed.or(default.seed),
        }
    }
}
