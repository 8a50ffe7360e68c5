//! Criterion benchmarks for u-tsp-ga.
//!
//! Measures a full engine run and the two permutation operators on
//! random circle instances of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use u_tsp_ga::cities::CityMap;
use u_tsp_ga::experiment::{Experiment, ExperimentConfig};
use u_tsp_ga::ga::operators::{order_crossover, swap_mutation};
use u_tsp_ga::ga::{EngineConfig, EvolutionEngine};

/// `n` cities evenly spaced on a circle of radius 100.
fn circle(n: usize) -> CityMap {
    let points = (0..n).map(|i| {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        (100.0 * angle.cos(), 100.0 * angle.sin())
    });
    CityMap::new(points).expect("circle instance is valid")
}

fn shuffled(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_engine_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 30usize, 20usize), (50, 100, 100), (100, 200, 200)] {
        let cities = circle(n);
        let config = EngineConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(cities, config),
            |b, (cities, config)| {
                b.iter(|| {
                    let mut engine =
                        EvolutionEngine::new(black_box(cities), config.clone()).expect("valid");
                    engine.run();
                    black_box(engine.into_result())
                })
            },
        );
    }
    group.finish();
}

fn bench_experiment(c: &mut Criterion) {
    let mut group = c.benchmark_group("experiment_ten_cities");
    group.sample_size(10);

    let cities = CityMap::ten_cities();
    let engine = EngineConfig::default();
    for &reps in &[10usize, 100] {
        let experiment = ExperimentConfig::default().with_repetitions(reps).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(reps), &experiment, |b, exp| {
            b.iter(|| black_box(Experiment::run(&cities, &engine, black_box(exp))))
        });
    }
    group.finish();
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[10usize, 100, 1000] {
        let p1 = shuffled(n, &mut rng);
        let p2 = shuffled(n, &mut rng);
        group.bench_with_input(BenchmarkId::new("order_crossover", n), &n, |b, _| {
            b.iter(|| black_box(order_crossover(black_box(&p1), black_box(&p2), &mut rng)))
        });

        let mut perm = p1.clone();
        group.bench_with_input(BenchmarkId::new("swap_mutation", n), &n, |b, _| {
            b.iter(|| swap_mutation(black_box(&mut perm), &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_run, bench_experiment, bench_operators);
criterion_main!(benches);
