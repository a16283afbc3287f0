//! Ranking-pool construction and elitist merging.

use super::types::{by_rank_desc, sort_desc, Chromosome};

/// Scores every genome of `population` with exactly one oracle call each.
///
/// Chromosomes come back in population order. `best_score` is raised to
/// the highest rank seen and never lowered.
pub(crate) fn rank_population<T, F>(
    population: &[Vec<T>],
    fitness: &mut F,
    best_score: &mut f64,
) -> Vec<Chromosome<T>>
where
    T: Clone,
    F: FnMut(&[T], Option<usize>) -> f64 + ?Sized,
{
    population
        .iter()
        .enumerate()
        .map(|(i, genome)| {
            let rank = fitness(genome, Some(i));
            *best_score = best_score.max(rank);
            Chromosome::new(genome.clone(), rank)
        })
        .collect()
}

/// Merges `current` with the previous generation's pool, rank by rank.
///
/// Both pools are sorted best-first and, at each position, the higher
/// ranked chromosome survives (ties keep the current one). The result is
/// sorted best-first, so no rank position ever regresses.
///
/// When `previous` is empty or the sizes differ, `current` is returned
/// untouched.
pub(crate) fn elitist_merge<T: Clone>(
    mut current: Vec<Chromosome<T>>,
    previous: &[Chromosome<T>],
) -> Vec<Chromosome<T>> {
    if previous.is_empty() || previous.len() != current.len() {
        return current;
    }

    let mut previous = previous.to_vec();
    sort_desc(&mut current);
    previous.sort_by(by_rank_desc);

    current
        .into_iter()
        .zip(previous)
        .map(|(new, old)| if old.rank > new.rank { old } else { new })
        .collect()
}
