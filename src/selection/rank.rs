use crate::error::{GeneticError, Result};
use crate::evolution::population::{compare_fitness, Candidate};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::sampling::binary_weighted_choice;
use crate::selection::resolve_choices;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals based on their rank in the population.
///
/// Rank-based selection assigns a selection probability to each individual based on its
/// rank in the population, rather than its absolute fitness value. This keeps the
/// selection pressure independent of the fitness scale and handles negative values.
///
/// # Side effect
///
/// `select_parents` sorts the population **in place**, ascending by fitness
/// (non-finite fitness last, ties in their previous order). The candidate at
/// position `i` afterwards receives weight `len - i`, so the best candidate
/// sits at index 0 with the highest weight. The returned indices refer to the sorted order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankBasedSelection;

impl RankBasedSelection {
    /// Creates a new `RankBasedSelection` strategy.
    pub fn new() -> Self {
        Self
    }

    /// Rank weights for a sorted population of `len` candidates.
    pub fn weights(len: usize) -> Vec<f64> {
        (0..len).map(|i| (len - i) as f64).collect()
    }
}

impl<G> SelectionStrategy<G> for RankBasedSelection
where
    G: Genome,
{
    fn select_parents(
        &self,
        population: &mut [Candidate<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        population.sort_by(|a, b| compare_fitness(a.fitness, b.fitness));

        let weights = Self::weights(population.len());
        let choices = binary_weighted_choice(&weights, population.len(), rng)?;

        Ok(resolve_choices(choices, population.len(), rng))
    }
}
