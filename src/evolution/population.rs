//! # Population
//!
//! A `Candidate` pairs a genome with its fitness so the value is computed once
//! per generation. A `Population` is an ordered sequence of candidates.
//! Order carries no meaning except for rank-based selection, which sorts the
//! population ascending by fitness in place.

use std::cmp::Ordering;

use crate::genome::Genome;

/// A genome together with its cached fitness value.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<G> {
    /// The scored genome.
    pub genome: G,
    /// The fitness of `genome`, lower is better.
    pub fitness: f64,
}

/// An ordered sequence of scored candidates.
pub type Population<G> = Vec<Candidate<G>>;

impl<G: Genome> Candidate<G> {
    /// Scores `genome` and wraps it into a candidate.
    pub fn evaluate(genome: G) -> Self {
        let fitness = genome.fitness();
        Self { genome, fitness }
    }
}

/// Orders fitness values ascending.
///
/// Non-finite values (NaN and both infinities) rank after every finite value
/// and tie with each other, matching the zero weight they receive in
/// fitness-proportional selection.
pub(crate) fn compare_fitness(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Returns the index of the first candidate with the lowest fitness, or `None`
/// for an empty slice.
pub fn best_index<G>(candidates: &[Candidate<G>]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, c)| match best {
            Some((_, f)) if compare_fitness(c.fitness, f) != Ordering::Less => best,
            _ => Some((i, c.fitness)),
        })
        .map(|(i, _)| i)
}

/// Returns the indices of the `count` best candidates, best first.
///
/// Candidates with equal fitness keep their population order. `count` is
/// capped at the population size.
pub fn elite_indices<G>(candidates: &[Candidate<G>], count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    indices.sort_by(|&a, &b| compare_fitness(candidates[a].fitness, candidates[b].fitness));
    indices.truncate(count);
    indices
}

/// Returns the arithmetic mean of the candidates' fitness, or NaN for an
/// empty slice.
pub fn mean_fitness<G>(candidates: &[Candidate<G>]) -> f64 {
    let sum: f64 = candidates.iter().map(|c| c.fitness).sum();
    sum / candidates.len() as f64
}
