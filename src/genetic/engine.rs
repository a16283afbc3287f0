//! The generational controller.
//!
//! [`Genetic`] owns the run state and advances it one generation per
//! [`apply`](Genetic::apply): rank → (elitist merge) → select → recombine
//! and mutate → next population.

use super::config::GeneticConfig;
use super::error::{GeneticError, Result};
use super::ranking::{elitist_merge, rank_population};
use super::types::{by_rank_desc, Chromosome, EngineState, FitnessOracle, MutationOracle};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::RngCore;
use std::fmt;

/// Why [`Genetic::run_until`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The caller's predicate returned `true`.
    Predicate,
    /// A generation produced an empty population.
    Collapsed,
    /// The generation cap was reached.
    GenerationLimit,
}

/// Outcome of a [`Genetic::run_until`] call.
#[derive(Debug, Clone)]
pub struct RunSummary<T> {
    /// Engine generation counter when the run stopped.
    pub generation: usize,

    /// Best score seen since construction or the last reset.
    pub best_score: f64,

    /// Best genome of the last ranked generation.
    pub best_genome: Option<Vec<T>>,

    /// Best score after each generation of this call (non-decreasing).
    pub score_history: Vec<f64>,

    /// What ended the run.
    pub stop_reason: StopReason,
}

/// Collects the oracles and configuration for a [`Genetic`] engine.
///
/// # Usage
///
/// ```
/// use rand::{Rng, RngCore};
/// use u_genetic::genetic::{Genetic, GeneticConfig};
///
/// let target = vec![1, 2, 3, 4];
/// let scoring = target.clone();
///
/// let mut engine = Genetic::<i32>::builder()
///     .with_config(GeneticConfig::default().with_seed(42))
///     .with_fitness(move |genome, _| {
///         genome.iter().zip(&scoring).filter(|(a, b)| a == b).count() as f64
///     })
///     .with_mutation(|rng: &mut dyn RngCore| rng.random_range(0..5))
///     .with_starting_population(vec![vec![0, 0, 0, 0]; 12])
///     .build()
///     .expect("oracles and config are set");
///
/// engine.apply();
/// assert_eq!(engine.generation(), 1);
/// ```
pub struct GeneticBuilder<T> {
    config: GeneticConfig,
    fitness: Option<FitnessOracle<T>>,
    mutation: Option<MutationOracle<T>>,
    starting_population: Vec<Vec<T>>,
}

impl<T: Clone + PartialEq> GeneticBuilder<T> {
    fn new() -> Self {
        Self {
            config: GeneticConfig::default(),
            fitness: None,
            mutation: None,
            starting_population: Vec::new(),
        }
    }

    /// Sets the engine configuration.
    pub fn with_config(mut self, config: GeneticConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the fitness oracle.
    pub fn with_fitness<F>(mut self, fitness: F) -> Self
    where
        F: FnMut(&[T], Option<usize>) -> f64 + 'static,
    {
        self.fitness = Some(Box::new(fitness));
        self
    }

    /// Sets the mutation oracle.
    pub fn with_mutation<M>(mut self, mutation: M) -> Self
    where
        M: FnMut(&mut dyn RngCore) -> T + 'static,
    {
        self.mutation = Some(Box::new(mutation));
        self
    }

    /// Sets the population used by the first generation after
    /// construction or reset.
    pub fn with_starting_population(mut self, population: Vec<Vec<T>>) -> Self {
        self.starting_population = population;
        self
    }

    /// Builds the engine.
    ///
    /// # Errors
    /// Returns [`GeneticError`] when an oracle is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<Genetic<T>> {
        let fitness = self.fitness.ok_or(GeneticError::MissingFitnessOracle)?;
        let mutation = self.mutation.ok_or(GeneticError::MissingMutationOracle)?;
        self.config.validate()?;

        let seed = self.config.seed.unwrap_or_else(rand::random);

        Ok(Genetic {
            config: self.config,
            seed,
            fitness,
            mutation,
            starting_population: self.starting_population,
            population: Vec::new(),
            ranking_pool: Vec::new(),
            previous_pool: Vec::new(),
            mating_pool: Vec::new(),
            generation: 0,
            best_score: 0.0,
            state: EngineState::Idle,
            rng: create_rng(seed),
        })
    }
}

/// Generational genetic-algorithm engine.
///
/// The caller drives the loop: call [`apply`](Self::apply) repeatedly and
/// check [`best_score`](Self::best_score), [`best_genome`](Self::best_genome)
/// or [`population`](Self::population) between calls. The engine never
/// decides on its own that a run has converged.
///
/// Given deterministic oracles and a fixed seed, every run is
/// reproducible, including after [`reset`](Self::reset).
pub struct Genetic<T> {
    config: GeneticConfig,
    seed: u64,
    fitness: FitnessOracle<T>,
    mutation: MutationOracle<T>,
    starting_population: Vec<Vec<T>>,
    population: Vec<Vec<T>>,
    ranking_pool: Vec<Chromosome<T>>,
    previous_pool: Vec<Chromosome<T>>,
    mating_pool: Vec<Chromosome<T>>,
    generation: usize,
    best_score: f64,
    state: EngineState,
    rng: StdRng,
}

impl<T: Clone + PartialEq> Genetic<T> {
    /// Starts building an engine.
    pub fn builder() -> GeneticBuilder<T> {
        GeneticBuilder::new()
    }

    /// Advances one generation and returns the new population.
    ///
    /// The first call after construction or [`reset`](Self::reset) starts
    /// from the starting population; later calls continue from the
    /// previous generation's offspring, even if that is empty.
    pub fn apply(&mut self) -> &[Vec<T>] {
        if self.state == EngineState::Idle {
            self.population = self.starting_population.clone();
        }
        self.advance();
        &self.population
    }

    /// Replaces the current population, then advances one generation.
    pub fn apply_with(&mut self, population: Vec<Vec<T>>) -> &[Vec<T>] {
        self.population = population;
        self.advance();
        &self.population
    }

    fn advance(&mut self) {
        let previous_best = self.best_score;

        // 1. Rank
        let ranked = rank_population(&self.population, &mut *self.fitness, &mut self.best_score);
        self.ranking_pool = if self.config.elitism {
            let merged = elitist_merge(ranked, &self.previous_pool);
            self.previous_pool = merged.clone();
            merged
        } else {
            ranked
        };
        self.transition(EngineState::Ranked);

        // 2. Select
        self.mating_pool = self.config.selection.mating_pool(
            &self.ranking_pool,
            self.config.number_of_children,
            self.best_score,
            &mut self.rng,
        );
        self.transition(EngineState::Selected);

        // 3. Recombine and mutate
        self.population = self.config.crossover.offspring(
            &self.mating_pool,
            self.config.number_of_children,
            self.config.mutation_factor,
            &mut *self.mutation,
            &mut self.rng,
        );
        self.generation += 1;
        self.transition(EngineState::Recombined);

        if self.best_score > previous_best {
            log::info!(
                "generation {}: best score improved {:.4} -> {:.4}",
                self.generation,
                previous_best,
                self.best_score
            );
        }
        log::debug!(
            "generation {}: ranked {}, mating pool {}, offspring {}, best {:.4}",
            self.generation,
            self.ranking_pool.len(),
            self.mating_pool.len(),
            self.population.len(),
            self.best_score
        );
        if self.population.is_empty() {
            log::warn!(
                "generation {} produced an empty population (mating pool {})",
                self.generation,
                self.mating_pool.len()
            );
        }
    }

    fn transition(&mut self, next: EngineState) {
        log::trace!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Runs generations until `stop` returns `true`, the population
    /// collapses, or `max_generations` generations have run.
    ///
    /// `stop` is evaluated after every generation, before the collapse
    /// check.
    pub fn run_until<S>(&mut self, max_generations: usize, mut stop: S) -> RunSummary<T>
    where
        S: FnMut(&Self) -> bool,
    {
        let mut score_history = Vec::with_capacity(max_generations.min(1024));
        let mut stop_reason = StopReason::GenerationLimit;

        for _ in 0..max_generations {
            self.apply();
            score_history.push(self.best_score);

            if stop(&*self) {
                stop_reason = StopReason::Predicate;
                break;
            }
            if self.population.is_empty() {
                stop_reason = StopReason::Collapsed;
                break;
            }
        }

        RunSummary {
            generation: self.generation,
            best_score: self.best_score,
            best_genome: self.best_genome().map(<[T]>::to_vec),
            score_history,
            stop_reason,
        }
    }

    /// Returns to [`EngineState::Idle`].
    ///
    /// Clears the generation counter, the best score, the population and
    /// every pool, and re-seeds the generator with the run's seed.
    /// Configuration, oracles and the starting population are kept.
    pub fn reset(&mut self) {
        self.generation = 0;
        self.best_score = 0.0;
        self.population.clear();
        self.ranking_pool.clear();
        self.previous_pool.clear();
        self.mating_pool.clear();
        self.rng = create_rng(self.seed);
        self.transition(EngineState::Idle);
    }

    /// Genome with the highest rank in the most recent ranking pool.
    ///
    /// `None` before the first generation or when that generation ranked
    /// an empty population.
    pub fn best_genome(&self) -> Option<&[T]> {
        self.ranking_pool
            .iter()
            .min_by(|a, b| by_rank_desc(*a, *b))
            .map(|c| c.genome.as_slice())
    }

    /// Scores a genome outside any population.
    ///
    /// The oracle receives no index. Run bookkeeping is not touched.
    pub fn score(&mut self, genome: &[T]) -> f64 {
        (self.fitness)(genome, None)
    }

    /// Replaces the starting population used after construction or reset.
    pub fn set_starting_population(&mut self, population: Vec<Vec<T>>) {
        self.starting_population = population;
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Highest rank seen since construction or the last reset.
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Current population (the last generation's offspring).
    pub fn population(&self) -> &[Vec<T>] {
        &self.population
    }

    /// Starting population.
    pub fn starting_population(&self) -> &[Vec<T>] {
        &self.starting_population
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Seed the generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ranking_pool_len(&self) -> usize {
        self.ranking_pool.len()
    }

    pub fn mating_pool_len(&self) -> usize {
        self.mating_pool.len()
    }
}

impl<T> fmt::Debug for Genetic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Genetic")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("generation", &self.generation)
            .field("best_score", &self.best_score)
            .field("state", &self.state)
            .field("population", &self.population.len())
            .finish_non_exhaustive()
    }
}
