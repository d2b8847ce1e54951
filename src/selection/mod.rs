//! # Selection
//!
//! Parent selection strategies. Each strategy turns a scored population into
//! one parent index per candidate, favoring lower fitness:
//!
//! - [`FitnessProportionalSelection`]: roulette wheel over inverted fitness.
//! - [`TournamentSelection`]: best of `tournament_size` distinct random candidates.
//! - [`RankBasedSelection`]: roulette wheel over rank weights, sorting the population.
//!
//! The [`Selection`] enum names a strategy inside [`GaSettings`](crate::evolution::GaSettings).

pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use rank::RankBasedSelection;
pub use roulette::FitnessProportionalSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::{tournament, TournamentSelection};

use crate::error::Result;
use crate::evolution::population::Candidate;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// The selection strategy used by an evolutionary run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Roulette wheel selection with weights decreasing in fitness.
    #[default]
    FitnessProportional,
    /// Tournament selection; requires a tournament size of at least 2.
    Tournament,
    /// Rank-based selection; sorts the population ascending as a side effect.
    RankBased,
}

impl Selection {
    /// Selects one parent index per candidate with the named strategy.
    ///
    /// `tournament_size` is only read for [`Selection::Tournament`].
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty population and
    /// `GeneticError::InvalidConfiguration` for a tournament smaller than 2.
    pub fn select_parents<G: Genome>(
        &self,
        population: &mut [Candidate<G>],
        tournament_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        match self {
            Selection::FitnessProportional => {
                FitnessProportionalSelection::new().select_parents(population, rng)
            }
            Selection::Tournament => {
                TournamentSelection::new(tournament_size)?.select_parents(population, rng)
            }
            Selection::RankBased => RankBasedSelection::new().select_parents(population, rng),
        }
    }
}

/// Replaces "no distribution" draws with uniformly random indices.
pub(crate) fn resolve_choices(
    choices: Vec<Option<usize>>,
    len: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    choices
        .into_iter()
        .map(|choice| choice.unwrap_or_else(|| rng.index(len)))
        .collect()
}
