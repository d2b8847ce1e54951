use crate::error::{GeneticError, Result};
use crate::evolution::population::Candidate;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::sampling::binary_weighted_choice;
use crate::selection::resolve_choices;
use crate::selection::selection_strategy::SelectionStrategy;

/// Offset added to every finite weight so the worst candidate keeps a
/// non-zero chance and a fully tied population stays uniform.
pub const PROPORTIONAL_EPSILON: f64 = 1e-10;

/// Fitness-proportional (roulette wheel) selection for minimization.
///
/// The weight of a candidate is
/// `(max_fitness - fitness) / (max_fitness - min_fitness) + PROPORTIONAL_EPSILON`,
/// where `max_fitness` and `min_fitness` are the extremes of the finite
/// fitness values in the population. Lower fitness therefore receives a higher
/// weight, and every weight lies in `[PROPORTIONAL_EPSILON, 1 + PROPORTIONAL_EPSILON]`
/// however far apart the fitness values are. Candidates with a non-finite
/// fitness receive weight zero. If no candidate has a finite fitness, parents
/// are drawn uniformly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitnessProportionalSelection;

impl FitnessProportionalSelection {
    /// Creates a new `FitnessProportionalSelection` strategy.
    pub fn new() -> Self {
        Self
    }

    /// Computes the sampling weight of every fitness value.
    pub fn weights(fitness: &[f64]) -> Vec<f64> {
        let (min_fitness, max_fitness) = fitness
            .iter()
            .copied()
            .filter(|f| f.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| (lo.min(f), hi.max(f)));

        // Differences are taken in halves: the gap between two finite f64
        // values can exceed f64::MAX.
        let half_span = max_fitness / 2.0 - min_fitness / 2.0;

        fitness
            .iter()
            .map(|&f| {
                if !f.is_finite() {
                    0.0
                } else if half_span > 0.0 {
                    (max_fitness / 2.0 - f / 2.0) / half_span + PROPORTIONAL_EPSILON
                } else {
                    PROPORTIONAL_EPSILON
                }
            })
            .collect()
    }
}

impl<G> SelectionStrategy<G> for FitnessProportionalSelection
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

        let fitness: Vec<f64> = population.iter().map(|c| c.fitness).collect();
        let weights = Self::weights(&fitness);
        let choices = binary_weighted_choice(&weights, population.len(), rng)?;

        Ok(resolve_choices(choices, population.len(), rng))
    }
}
