use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::population::{compare_fitness, Candidate};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Returns the index of the lowest key, preferring the earliest on ties.
///
/// Non-finite keys lose against every finite key. Returns `None` only for an empty
/// slice. The result does not depend on randomness, so a tournament over
/// ascending keys is always won by index 0.
///
/// ```
/// use genopt::selection::tournament;
///
/// assert_eq!(tournament(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]), Some(0));
/// assert_eq!(tournament(&[3.0, f64::NAN, 2.0]), Some(2));
/// assert_eq!(tournament(&[]), None);
/// ```
pub fn tournament(keys: &[f64]) -> Option<usize> {
    let mut winner: Option<usize> = None;
    for (i, &key) in keys.iter().enumerate() {
        match winner {
            Some(w) if compare_fitness(key, keys[w]).is_ge() => {}
            _ => winner = Some(i),
        }
    }
    winner
}

/// A selection strategy that fills every parent slot with the winner of a
/// tournament.
///
/// Each tournament draws `tournament_size` distinct candidates uniformly at
/// random and keeps the one with the lowest fitness. Larger tournaments
/// increase selection pressure. When the population is smaller than the
/// tournament, the whole population competes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TournamentSelectionFields"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

/// Unchecked wire form of [`TournamentSelection`], validated through `new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TournamentSelectionFields {
    tournament_size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<TournamentSelectionFields> for TournamentSelection {
    type Error = GeneticError;

    fn try_from(fields: TournamentSelectionFields) -> Result<Self> {
        Self::new(fields.tournament_size)
    }
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if `tournament_size` is
    /// smaller than 2.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 2 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Tournament size must be at least 2, got {}",
                tournament_size
            )));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament<G>(
        &self,
        population: &[Candidate<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<usize> {
        let size = self.tournament_size.min(population.len());
        let participants = rng.distinct_indices(population.len(), size);
        let keys: Vec<f64> = participants
            .iter()
            .map(|&i| population[i].fitness)
            .collect();

        tournament(&keys)
            .map(|winner| participants[winner])
            .ok_or_else_genetic(|| {
                GeneticError::Evolution("Tournament ran without participants".to_string())
            })
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl<G> SelectionStrategy<G> for TournamentSelection
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

        let population: &[Candidate<G>] = population;
        (0..population.len())
            .map(|_| self.run_tournament(population, rng))
            .collect()
    }
}
