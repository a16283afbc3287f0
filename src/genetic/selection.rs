//! Mating-pool construction.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (fitness-proportionate reproduction)

use super::config::SelectionStrategy;
use super::types::{sort_desc, Chromosome};
use crate::seq::dedup_shuffle;
use rand::Rng;

impl SelectionStrategy {
    /// Builds the mating pool for one generation.
    ///
    /// `draws` is the configured offspring count and `best_score` the
    /// best rank seen so far in the run.
    pub(crate) fn mating_pool<T, R>(
        &self,
        ranking: &[Chromosome<T>],
        draws: usize,
        best_score: f64,
        rng: &mut R,
    ) -> Vec<Chromosome<T>>
    where
        T: Clone + PartialEq,
        R: Rng + ?Sized,
    {
        match self {
            SelectionStrategy::Descending => descending(ranking),
            SelectionStrategy::Stochastic => stochastic(ranking, draws, best_score, rng),
        }
    }
}

/// The whole ranking pool, best first.
fn descending<T: Clone>(ranking: &[Chromosome<T>]) -> Vec<Chromosome<T>> {
    let mut pool = ranking.to_vec();
    sort_desc(&mut pool);
    pool
}

/// Fitness-proportionate sampling with rejection.
///
/// Each draw shuffles the distinct chromosomes and takes the first one
/// whose rank clears a threshold drawn from `[0, best_score]`. A draw that
/// nothing clears is dropped, so the pool can hold fewer than `draws`
/// members.
fn stochastic<T, R>(
    ranking: &[Chromosome<T>],
    draws: usize,
    best_score: f64,
    rng: &mut R,
) -> Vec<Chromosome<T>>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    if ranking.is_empty() {
        return Vec::new();
    }

    let mut pool = Vec::with_capacity(draws);
    for _ in 0..draws {
        let shuffled = dedup_shuffle(ranking, rng);
        let threshold = draw_threshold(best_score, rng);
        if let Some(chosen) = shuffled.into_iter().find(|c| c.rank >= threshold) {
            pool.push(chosen);
        }
    }
    pool
}

/// Uniform threshold in `[0, best_score]`; zero when the range is empty.
fn draw_threshold<R: Rng + ?Sized>(best_score: f64, rng: &mut R) -> f64 {
    if best_score > 0.0 && best_score.is_finite() {
        rng.random_range(0.0..=best_score)
    } else {
        0.0
    }
}
