//! Criterion benchmarks for the genetic engine.
//!
//! Uses the target-matching problem (score = squared fraction of matching
//! positions) to measure per-generation overhead of each strategy pair.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, RngCore};
use u_genetic::genetic::{CrossoverStrategy, Genetic, GeneticConfig, SelectionStrategy};
use u_genetic::random::create_rng;
use u_genetic::seq::dedup_shuffle;

fn target_engine(config: GeneticConfig, size: usize, len: usize) -> Genetic<u32> {
    let target: Vec<u32> = (0..len as u32).collect();
    let mut rng = create_rng(1);
    let population: Vec<Vec<u32>> = (0..size)
        .map(|_| (0..len).map(|_| rng.random_range(0..len as u32)).collect())
        .collect();

    Genetic::<u32>::builder()
        .with_config(config.with_number_of_children(size).with_seed(42))
        .with_fitness(move |genome, _| {
            let hits = genome.iter().zip(&target).filter(|(a, b)| a == b).count();
            (hits as f64 / target.len() as f64).powi(2)
        })
        .with_mutation(move |rng: &mut dyn RngCore| rng.random_range(0..len as u32))
        .with_starting_population(population)
        .build()
        .expect("valid engine")
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    let strategies = [
        ("stochastic_halve", SelectionStrategy::Stochastic, CrossoverStrategy::HalveRecombine),
        ("stochastic_uniform", SelectionStrategy::Stochastic, CrossoverStrategy::Uniform),
        ("descending_uniform", SelectionStrategy::Descending, CrossoverStrategy::Uniform),
    ];

    for (name, selection, crossover) in strategies {
        for size in [50usize, 100, 200] {
            let config = GeneticConfig::default()
                .with_mutation_factor(10)
                .with_selection(selection)
                .with_crossover(crossover);

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                b.iter_batched(
                    || target_engine(config.clone(), size, 16),
                    |mut engine| {
                        for _ in 0..10 {
                            black_box(engine.apply());
                        }
                    },
                    criterion::BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_dedup_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_shuffle");
    let mut rng = create_rng(42);

    for size in [50usize, 200, 800] {
        let items: Vec<u32> = (0..size as u32).map(|i| i % (size as u32 / 2)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| black_box(dedup_shuffle(items, &mut rng)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_dedup_shuffle);
criterion_main!(benches);
