use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genopt::{
    evolution::population::Candidate,
    genome::Genome,
    rng::RandomNumberGenerator,
    sampling::{binary_weighted_choice, weighted_choice},
    selection::Selection,
};

fn bench_sampling(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("weighted_sampling");
    for size in [10, 100, 1000].iter() {
        let weights: Vec<f64> = (0..*size).map(|i| (i % 7) as f64).collect();

        group.bench_function(format!("linear_{}", size), |b| {
            b.iter(|| {
                let result = weighted_choice(black_box(&weights), *size, &mut rng);
                assert!(result.is_ok());
            })
        });

        group.bench_function(format!("binary_{}", size), |b| {
            b.iter(|| {
                let result = binary_weighted_choice(black_box(&weights), *size, &mut rng);
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("selection");
    for size in [10, 100, 1000].iter() {
        let population: Vec<Candidate<TestGenome>> = rng
            .fetch_uniform(-10.0, 10.0, *size)
            .into_iter()
            .map(|value| Candidate::evaluate(TestGenome { value }))
            .collect();

        for selection in [
            Selection::FitnessProportional,
            Selection::Tournament,
            Selection::RankBased,
        ] {
            group.bench_function(format!("{:?}_{}", selection, size), |b| {
                b.iter(|| {
                    let mut population = population.clone();
                    let result = selection.select_parents(black_box(&mut population), 3, &mut rng);
                    assert!(result.is_ok());
                })
            });
        }
    }
    group.finish();
}

#[derive(Clone, Debug)]
struct TestGenome {
    value: f64,
}

impl Genome for TestGenome {
    fn fitness(&self) -> f64 {
        self.value * self.value
    }

    fn crossover(&self, other: &Self, _rng: &mut RandomNumberGenerator) -> Self {
        TestGenome {
            value: (self.value + other.value) / 2.0,
        }
    }

    fn mutate(&self, rng: &mut RandomNumberGenerator) -> Self {
        TestGenome {
            value: self.value + rng.uniform(-1.0, 1.0),
        }
    }
}

criterion_group!(benches, bench_sampling, bench_selection);
criterion_main!(benches);
