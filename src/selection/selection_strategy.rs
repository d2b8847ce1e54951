use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::population::Candidate;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy turns a scored population into a list of parent
/// indices. The list always has one entry per candidate, and entries may
/// repeat. Strategies favor lower fitness.
///
/// The population is passed mutably because some strategies reorder it (see
/// [`RankBasedSelection`](crate::selection::RankBasedSelection)). The returned
/// indices always refer to the population's order *after* the call.
///
/// # Examples
///
/// ```
/// use genopt::evolution::population::Candidate;
/// use genopt::genome::Genome;
/// use genopt::rng::RandomNumberGenerator;
/// use genopt::selection::{SelectionStrategy, TournamentSelection};
/// use genopt::error::Result;
///
/// #[derive(Clone, Debug)]
/// struct Value(f64);
///
/// impl Genome for Value {
///     fn fitness(&self) -> f64 {
///         self.0
///     }
///
///     fn crossover(&self, other: &Self, _rng: &mut RandomNumberGenerator) -> Self {
///         Value((self.0 + other.0) / 2.0)
///     }
///
///     fn mutate(&self, _rng: &mut RandomNumberGenerator) -> Self {
///         Value(self.0 + 0.1)
///     }
/// }
///
/// fn main() -> Result<()> {
///     let mut population: Vec<Candidate<Value>> =
///         [0.5, 0.8, 0.3].into_iter().map(|v| Candidate::evaluate(Value(v))).collect();
///     let mut rng = RandomNumberGenerator::from_seed(9);
///
///     let selection = TournamentSelection::new(2)?;
///     let parents = selection.select_parents(&mut population, &mut rng)?;
///
///     assert_eq!(parents.len(), 3);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<G>: Debug
where
    G: Genome,
{
    /// Selects `population.len()` parent indices.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the population is empty, or
    /// propagates sampler errors.
    fn select_parents(
        &self,
        population: &mut [Candidate<G>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}
