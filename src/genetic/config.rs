//! Engine configuration.
//!
//! [`GeneticConfig`] holds the numeric parameters and the two strategy
//! axes (selection and crossover) that control each generation.

use super::error::{GeneticError, Result};

/// How the mating pool is built from the ranking pool.
///
/// # Examples
///
/// ```
/// use u_genetic::genetic::SelectionStrategy;
///
/// // Fitness-proportionate sampling (the default)
/// let sel = SelectionStrategy::Stochastic;
///
/// // Whole ranking pool, best first
/// let sel = SelectionStrategy::Descending;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// The mating pool is the ranking pool sorted by rank, best first.
    ///
    /// Fast and deterministic, but low diversity: under uniform crossover
    /// the same two parents breed the whole generation.
    Descending,

    /// Fitness-proportionate sampling with rejection.
    ///
    /// For each of the `number_of_children` draws: shuffle the distinct
    /// chromosomes, draw a threshold uniformly in `[0, best_score]`, and
    /// take the first chromosome whose rank reaches it. A draw that no
    /// chromosome clears adds nothing, so the mating pool may come out
    /// smaller than requested.
    ///
    /// # Complexity
    /// O(n²) per draw (equality-only dedup), O(k·n²) per generation
    #[default]
    Stochastic,
}

/// How offspring genomes are built from the mating pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverStrategy {
    /// Split the pool into two halves, pair members rank by rank, and swap
    /// genome halves between each pair.
    ///
    /// Yields two children per pair and `2 · (|pool| / 2 − 1)` children in
    /// total, so populations shrink slightly each generation unless the
    /// selection strategy refills the pool.
    ///
    /// Mutation: one draw per pair; on a hit, one random position of each
    /// child is overwritten.
    #[default]
    HalveRecombine,

    /// The two best mating-pool members donate every gene by coin flip.
    ///
    /// Yields exactly `number_of_children` children, or none when the pool
    /// holds fewer than two members.
    ///
    /// Mutation: one draw per gene slot; on a hit, that slot is
    /// overwritten.
    Uniform,
}

/// Configuration for the genetic engine.
///
/// # Defaults
///
/// ```
/// use u_genetic::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.mutation_factor, 100);
/// assert_eq!(config.number_of_children, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::genetic::{CrossoverStrategy, GeneticConfig, SelectionStrategy};
///
/// let config = GeneticConfig::default()
///     .with_mutation_factor(10)
///     .with_number_of_children(100)
///     .with_selection(SelectionStrategy::Stochastic)
///     .with_crossover(CrossoverStrategy::Uniform)
///     .with_elitism(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticConfig {
    /// Inverse mutation frequency.
    ///
    /// Each mutation opportunity draws an integer in `[0, mutation_factor]`
    /// and mutates when it equals 1, so the chance per opportunity is
    /// `1 / (mutation_factor + 1)`. Must be at least 1.
    pub mutation_factor: usize,

    /// Offspring requested per generation.
    ///
    /// Stochastic selection makes this many draws; uniform crossover
    /// produces exactly this many children. Must be at least 1.
    pub number_of_children: usize,

    /// Mating-pool construction strategy.
    pub selection: SelectionStrategy,

    /// Recombination strategy.
    pub crossover: CrossoverStrategy,

    /// Merge each ranking pool with the previous generation's, keeping the
    /// better chromosome at every rank position.
    ///
    /// Only applies when both pools have the same size.
    pub elitism: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed once when the engine is built; the drawn seed
    /// is kept so [`reset`](super::Genetic::reset) still replays the run.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            mutation_factor: 100,
            number_of_children: 10,
            selection: SelectionStrategy::default(),
            crossover: CrossoverStrategy::default(),
            elitism: false,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the mutation factor.
    pub fn with_mutation_factor(mut self, factor: usize) -> Self {
        self.mutation_factor = factor;
        self
    }

    /// Sets the number of offspring per generation.
    pub fn with_number_of_children(mut self, n: usize) -> Self {
        self.number_of_children = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: CrossoverStrategy) -> Self {
        self.crossover = crossover;
        self
    }

    /// Enables or disables elitist merging of ranking pools.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Probability that a single mutation opportunity fires.
    pub fn mutation_probability(&self) -> f64 {
        1.0 / (self.mutation_factor as f64 + 1.0)
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<()> {
        if self.mutation_factor == 0 {
            return Err(GeneticError::InvalidMutationFactor(self.mutation_factor));
        }
        if self.number_of_children == 0 {
            return Err(GeneticError::InvalidOffspringCount(self.number_of_children));
        }
        Ok(())
    }
}
