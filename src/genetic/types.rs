//! Core types shared by the ranking, selection, and crossover stages.

use rand::RngCore;
use std::cmp::Ordering;

/// Scores a genome. Higher is better.
///
/// The second argument is the genome's position in the population being
/// ranked. The engine always passes `Some`; `None` is for callers scoring
/// a genome that belongs to no population.
pub type FitnessOracle<T> = Box<dyn FnMut(&[T], Option<usize>) -> f64>;

/// Mints a fresh gene value for mutation.
///
/// Receives the engine's seeded generator so minted values are
/// reproducible under a fixed seed. Oracles are free to ignore it.
pub type MutationOracle<T> = Box<dyn FnMut(&mut dyn RngCore) -> T>;

/// A genome paired with the rank it scored this generation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Chromosome<T> {
    pub(crate) genome: Vec<T>,
    pub(crate) rank: f64,
}

impl<T> Chromosome<T> {
    pub(crate) fn new(genome: Vec<T>, rank: f64) -> Self {
        Self { genome, rank }
    }
}

/// Where the engine is within its generation cycle.
///
/// `apply` walks `Ranked → Selected → Recombined`; `reset` returns to
/// `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No generation has run since construction or the last reset.
    #[default]
    Idle,
    /// The ranking pool holds this generation's scores.
    Ranked,
    /// The mating pool has been built.
    Selected,
    /// The next population is ready and the counter has advanced.
    Recombined,
}

/// Best-first comparison on rank. NaN ranks compare as equal.
pub(crate) fn by_rank_desc<T>(a: &Chromosome<T>, b: &Chromosome<T>) -> Ordering {
    b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal)
}

/// Stable best-first sort of a chromosome pool.
pub(crate) fn sort_desc<T>(pool: &mut [Chromosome<T>]) {
    pool.sort_by(by_rank_desc);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_desc_is_stable() {
        let mut pool = vec![
            Chromosome::new(vec!['a'], 0.5),
            Chromosome::new(vec!['b'], 0.9),
            Chromosome::new(vec!['c'], 0.5),
            Chromosome::new(vec!['d'], 0.1),
        ];
        sort_desc(&mut pool);
        let order: Vec<char> = pool.iter().map(|c| c.genome[0]).collect();
        assert_eq!(order, vec!['b', 'a', 'c', 'd']);
    }

    #[test]
    fn test_chromosome_equality_needs_rank_and_genome() {
        let a = Chromosome::new(vec![1, 2], 0.5);
        assert_eq!(a, Chromosome::new(vec![1, 2], 0.5));
        assert_ne!(a, Chromosome::new(vec![1, 2], 0.6));
        assert_ne!(a, Chromosome::new(vec![2, 1], 0.5));
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(EngineState::default(), EngineState::Idle);
    }
}
