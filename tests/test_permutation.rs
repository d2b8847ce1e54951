use genopt::{
    crossover::order_based_crossover,
    evolution::{EvolutionLauncher, GaSettings, Selection},
    genome::Genome,
    rng::RandomNumberGenerator,
};

const CITIES: usize = 10;

/// A round trip through cities placed evenly on a unit circle. Visiting them in
/// circular order is optimal.
#[derive(Clone, Debug, PartialEq)]
struct Tour {
    order: Vec<usize>,
}

impl Tour {
    fn position(city: usize) -> (f64, f64) {
        let angle = 2.0 * std::f64::consts::PI * city as f64 / CITIES as f64;
        (angle.cos(), angle.sin())
    }

    fn random(rng: &mut RandomNumberGenerator) -> Self {
        let order = rng.distinct_indices(CITIES, CITIES);
        Self { order }
    }

    fn optimal_length() -> f64 {
        Tour {
            order: (0..CITIES).collect(),
        }
        .fitness()
    }
}

impl Genome for Tour {
    fn fitness(&self) -> f64 {
        let n = self.order.len();
        (0..n)
            .map(|i| {
                let (x1, y1) = Self::position(self.order[i]);
                let (x2, y2) = Self::position(self.order[(i + 1) % n]);
                ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
            })
            .sum()
    }

    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> Self {
        let order = order_based_crossover(&self.order, &other.order, rng)
            .expect("tours always have the same length");
        Self { order }
    }

    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
        let mut order = self.order.clone();
        let i = rng.index(order.len());
        let j = rng.index(order.len());
        order.swap(i, j);
        Self { order }
    }
}

fn is_permutation(order: &[usize]) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..CITIES).collect::<Vec<_>>()
}

#[test]
fn test_tours_stay_permutations() {
    let mut rng = RandomNumberGenerator::from_seed(5);
    let population: Vec<Tour> = (0..30).map(|_| Tour::random(&mut rng)).collect();
    let initial_best = population
        .iter()
        .map(Tour::fitness)
        .fold(f64::INFINITY, f64::min);

    let settings = GaSettings::builder()
        .mutation_rate(0.3)
        .elitism(2)
        .max_iterations(150)
        .selection(Selection::Tournament)
        .tournament_size(3)
        .build();

    let result = EvolutionLauncher::new(settings)
        .evolve(population, &mut rng)
        .unwrap();

    assert!(is_permutation(&result.best_genome.order));
    assert!(result.best_fitness <= initial_best);
    assert!(result.best_fitness >= Tour::optimal_length() - 1e-9);
    assert_eq!(result.evaluations, 30 * 150);
}

#[test]
fn test_crossover_keeps_parents_intact() {
    let mut rng = RandomNumberGenerator::from_seed(8);
    let a = Tour::random(&mut rng);
    let b = Tour::random(&mut rng);
    let (a_before, b_before) = (a.clone(), b.clone());

    for _ in 0..100 {
        let child = a.crossover(&b, &mut rng);
        assert!(is_permutation(&child.order));
    }

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
