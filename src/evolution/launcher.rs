use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use super::{
    population::{best_index, compare_fitness, elite_indices, mean_fitness, Candidate, Population},
    settings::GaSettings,
};
use crate::{
    error::{GeneticError, OptionExt, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// The state of one generation, kept when `keep_intermediate_results` is set.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSnapshot {
    /// Zero-based index of the generation.
    pub iteration: usize,
    /// Best fitness seen so far in the run, including this generation.
    pub best_fitness: f64,
    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,
}

/// Represents the result of an evolutionary run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<G: Genome> {
    /// The best genome found during the entire run.
    pub best_genome: G,
    /// The fitness of `best_genome`.
    pub best_fitness: f64,
    /// Number of generations executed.
    pub iterations: usize,
    /// Number of fitness evaluations performed.
    pub evaluations: usize,
    /// Wall-clock duration of the run.
    pub runtime: Duration,
    /// One snapshot per generation, empty unless requested in the settings.
    pub history: Vec<GenerationSnapshot>,
}

/// Runs the genetic algorithm loop under a fixed set of settings.
///
/// Every generation goes through the same steps:
///
/// 1. **Evaluate** every genome once.
/// 2. **Track** the best genome of the run and record a snapshot.
/// 3. **Select** one parent index per candidate with the configured strategy.
/// 4. **Elitism** copies the best candidates unchanged into the next generation.
/// 5. **Breed** fills every other slot with the crossover of two uniformly
///    picked parents, mutated with probability `mutation_rate`.
/// 6. **Replace** the population with the new genomes.
///
/// Steps 3 to 6 are skipped in the last generation, whose offspring would
/// never be evaluated.
///
/// Random draws happen in a fixed order per generation. Selection draws come
/// first. Then, for each bred slot, the loop draws two parent picks, the
/// crossover's draws, the mutation coin, and the mutation's draws. A seeded
/// generator therefore reproduces a run exactly.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    settings: GaSettings,
}

impl EvolutionLauncher {
    /// Creates a new `EvolutionLauncher` with the given settings.
    ///
    /// The settings are validated when a run starts, not here.
    pub fn new(settings: GaSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GaSettings {
        &self.settings
    }

    /// Evolves `population` for `max_iterations` generations.
    ///
    /// # Arguments
    ///
    /// * `population` - The initial genomes. Their number stays constant.
    /// * `rng` - The random source of the run.
    ///
    /// # Errors
    ///
    /// Fails without evaluating any genome if the settings are invalid on
    /// their own or for this population (see [`GaSettings::verify`] and
    /// [`GaSettings::verify_for_population`]). Errors raised during selection
    /// abort the run.
    pub fn evolve<G: Genome>(
        &self,
        population: Vec<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<G>> {
        let started = Instant::now();
        let settings = &self.settings;

        settings.verify()?;
        settings.verify_for_population(population.len())?;

        debug!(
            population_size = population.len(),
            max_iterations = settings.max_iterations,
            selection = ?settings.selection,
            "starting genetic algorithm"
        );

        let mut genomes = population;
        let mut evaluations = 0;
        let mut best: Option<Candidate<G>> = None;
        let mut history = if settings.keep_intermediate_results {
            Vec::with_capacity(settings.max_iterations)
        } else {
            Vec::new()
        };

        for iteration in 0..settings.max_iterations {
            let mut scored: Population<G> =
                genomes.into_iter().map(Candidate::evaluate).collect();
            evaluations += scored.len();

            let generation_best = best_index(&scored).ok_or_else_genetic(|| {
                GeneticError::Evolution(format!("Generation {} has no candidates", iteration))
            })?;
            let improved = match &best {
                Some(current) => {
                    compare_fitness(scored[generation_best].fitness, current.fitness).is_lt()
                }
                None => true,
            };
            if improved {
                best = Some(scored[generation_best].clone());
            }

            let best_fitness = best.as_ref().map_or(f64::NAN, |b| b.fitness);
            if settings.keep_intermediate_results {
                history.push(GenerationSnapshot {
                    iteration,
                    best_fitness,
                    mean_fitness: mean_fitness(&scored),
                });
            }
            if settings.verbose > 0 && (iteration + 1) % settings.verbose == 0 {
                info!(iteration, best_fitness, evaluations, "generation complete");
            }

            if iteration + 1 == settings.max_iterations {
                break;
            }
            genomes = self.next_generation(&mut scored, rng)?;
        }

        let best = best.ok_or_else_genetic(|| {
            GeneticError::Evolution("Evolution completed without a best candidate".to_string())
        })?;
        let runtime = started.elapsed();

        debug!(
            iterations = settings.max_iterations,
            evaluations,
            best_fitness = best.fitness,
            ?runtime,
            "genetic algorithm finished"
        );

        Ok(EvolutionResult {
            best_genome: best.genome,
            best_fitness: best.fitness,
            iterations: settings.max_iterations,
            evaluations,
            runtime,
            history,
        })
    }

    /// Selects parents from `population` and breeds the next generation.
    fn next_generation<G: Genome>(
        &self,
        population: &mut Population<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<G>> {
        let settings = &self.settings;
        let parents = settings
            .selection
            .select_parents(population, settings.tournament_size, rng)?;
        trace!(?parents, "parents selected");

        let mut next = Vec::with_capacity(population.len());
        next.extend(
            elite_indices(population, settings.elitism)
                .into_iter()
                .map(|i| population[i].genome.clone()),
        );

        while next.len() < population.len() {
            let first = parents[rng.index(parents.len())];
            let second = parents[rng.index(parents.len())];

            let mut offspring = population[first]
                .genome
                .crossover(&population[second].genome, rng);
            if rng.chance(settings.mutation_rate) {
                offspring = offspring.mutate(rng);
            }
            next.push(offspring);
        }

        Ok(next)
    }
}

/// Runs the genetic algorithm on `population` with `settings`.
///
/// The random source is seeded from `settings.seed`, or from system entropy
/// when no seed is set.
///
/// # Example
///
/// ```rust
/// use genopt::evolution::{run, GaSettings};
/// use genopt::genome::Genome;
/// use genopt::rng::RandomNumberGenerator;
///
/// #[derive(Clone, Debug)]
/// struct Point(f64);
///
/// impl Genome for Point {
///     fn fitness(&self) -> f64 {
///         (self.0 - 3.0).powi(2)
///     }
///
///     fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
///         Point(self.0 + rng.uniform(0.0, 1.0) * (other.0 - self.0))
///     }
///
///     fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
///         Point(self.0 + rng.uniform(-0.5, 0.5))
///     }
/// }
///
/// let population: Vec<Point> = (0..20).map(|i| Point(i as f64 - 10.0)).collect();
/// let settings = GaSettings::builder()
///     .elitism(1)
///     .max_iterations(50)
///     .seed(17)
///     .build();
///
/// let result = run(population, &settings).unwrap();
/// assert_eq!(result.iterations, 50);
/// assert_eq!(result.evaluations, 20 * 50);
/// assert!(result.best_fitness < 0.5);
/// ```
pub fn run<G: Genome>(population: Vec<G>, settings: &GaSettings) -> Result<EvolutionResult<G>> {
    let mut rng = RandomNumberGenerator::from_optional_seed(settings.seed);
    EvolutionLauncher::new(settings.clone()).evolve(population, &mut rng)
}
