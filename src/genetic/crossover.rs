//! Recombination and mutation.
//!
//! Both strategies share the same mutation trigger: draw an integer in
//! `[0, mutation_factor]` and mutate on [`MUTATION_SENTINEL`]. They differ
//! in where the trigger is drawn and which slot it overwrites.
//!
//! - [`CrossoverStrategy::HalveRecombine`]: one draw per parent pair; a hit
//!   overwrites one random slot in each of the two children.
//! - [`CrossoverStrategy::Uniform`]: one draw per gene slot written; a hit
//!   overwrites that slot.

use super::config::CrossoverStrategy;
use super::types::{by_rank_desc, sort_desc, Chromosome};
use crate::seq::halve;
use rand::{Rng, RngCore};

/// Draw value that triggers a mutation.
pub(crate) const MUTATION_SENTINEL: usize = 1;

impl CrossoverStrategy {
    /// Builds the next population from the mating pool.
    ///
    /// Degenerate pools (too few members for the strategy) yield an empty
    /// population rather than an error.
    pub(crate) fn offspring<T, M, R>(
        &self,
        mating: &[Chromosome<T>],
        number_of_children: usize,
        mutation_factor: usize,
        mint: &mut M,
        rng: &mut R,
    ) -> Vec<Vec<T>>
    where
        T: Clone,
        M: FnMut(&mut dyn RngCore) -> T + ?Sized,
        R: Rng,
    {
        match self {
            CrossoverStrategy::HalveRecombine => {
                halve_recombine(mating, mutation_factor, mint, rng)
            }
            CrossoverStrategy::Uniform => {
                uniform(mating, number_of_children, mutation_factor, mint, rng)
            }
        }
    }
}

fn mutation_hit<R: Rng>(mutation_factor: usize, rng: &mut R) -> bool {
    rng.random_range(0..=mutation_factor) == MUTATION_SENTINEL
}

fn mint_gene<T, M, R>(mint: &mut M, rng: &mut R) -> T
where
    M: FnMut(&mut dyn RngCore) -> T + ?Sized,
    R: Rng,
{
    let rng: &mut dyn RngCore = rng;
    mint(rng)
}

/// Pairs the two halves of the pool rank by rank and swaps genome halves.
///
/// For each pair `(l, r)` the children are `r.head + l.tail` and
/// `l.head + r.tail`. The last rank position of each half is left unpaired.
fn halve_recombine<T, M, R>(
    mating: &[Chromosome<T>],
    mutation_factor: usize,
    mint: &mut M,
    rng: &mut R,
) -> Vec<Vec<T>>
where
    T: Clone,
    M: FnMut(&mut dyn RngCore) -> T + ?Sized,
    R: Rng,
{
    let (mut left, mut right) = halve(mating);
    sort_desc(&mut left);
    sort_desc(&mut right);

    let pairs = left.len().min(right.len()).saturating_sub(1);
    if pairs == 0 {
        log::debug!(
            "mating pool of {} too small to halve and recombine",
            mating.len()
        );
        return Vec::new();
    }

    let mut children = Vec::with_capacity(pairs * 2);
    for (l, r) in left.iter().zip(&right).take(pairs) {
        if l.genome.len() < 2 || r.genome.len() < 2 {
            log::debug!("skipping pair with genome shorter than 2");
            continue;
        }

        let (l_head, l_tail) = halve(&l.genome);
        let (r_head, r_tail) = halve(&r.genome);

        let mut mother = [r_head, l_tail].concat();
        let mut father = [l_head, r_tail].concat();

        if mutation_hit(mutation_factor, rng) {
            let m = rng.random_range(0..mother.len());
            let f = rng.random_range(0..father.len());
            mother[m] = mint_gene(mint, rng);
            father[f] = mint_gene(mint, rng);
        }

        children.push(mother);
        children.push(father);
    }
    children
}

/// Breeds every child from the two best mating-pool members.
///
/// Each gene comes from either donor by fair coin flip, then may be
/// replaced by a minted value. Children have the shared donor length.
fn uniform<T, M, R>(
    mating: &[Chromosome<T>],
    number_of_children: usize,
    mutation_factor: usize,
    mint: &mut M,
    rng: &mut R,
) -> Vec<Vec<T>>
where
    T: Clone,
    M: FnMut(&mut dyn RngCore) -> T + ?Sized,
    R: Rng,
{
    if mating.len() < 2 {
        log::debug!(
            "uniform crossover needs 2 parents, mating pool has {}",
            mating.len()
        );
        return Vec::new();
    }

    let mut ranked: Vec<&Chromosome<T>> = mating.iter().collect();
    ranked.sort_by(|a, b| by_rank_desc(*a, *b));
    let mother = &ranked[0].genome;
    let father = &ranked[1].genome;

    let mut children = Vec::with_capacity(number_of_children);
    for _ in 0..number_of_children {
        let mut child = Vec::with_capacity(mother.len().min(father.len()));
        for (m, f) in mother.iter().zip(father) {
            let gene = if rng.random_bool(0.5) {
                m.clone()
            } else {
                f.clone()
            };
            if mutation_hit(mutation_factor, rng) {
                child.push(mint_gene(mint, rng));
            } else {
                child.push(gene);
            }
        }
        children.push(child);
    }
    children
}
