//! Generational genetic algorithm.
//!
//! One engine, two strategy axes. Callers supply a fitness oracle that
//! scores genomes and a mutation oracle that mints new gene values; the
//! engine owns everything else and advances one generation per call.
//!
//! # Generation cycle
//!
//! 1. **Rank**: score every genome once; optionally merge with the previous
//!    generation's pool so no rank position regresses ([elitism]).
//! 2. **Select**: build the mating pool ([`SelectionStrategy`]).
//! 3. **Recombine**: breed and mutate the next population
//!    ([`CrossoverStrategy`]).
//!
//! [elitism]: GeneticConfig::elitism
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: mutation factor, offspring count, strategies, seed
//! - [`Genetic`]: the engine; built through [`GeneticBuilder`]
//! - [`RunSummary`]: result of [`Genetic::run_until`]
//! - [`GeneticError`]: configuration errors rejected at build time
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod crossover;
mod engine;
mod error;
mod ranking;
mod selection;
mod types;

pub use config::{CrossoverStrategy, GeneticConfig, SelectionStrategy};
pub use engine::{Genetic, GeneticBuilder, RunSummary, StopReason};
pub use error::{GeneticError, Result};
pub use types::{EngineState, FitnessOracle, MutationOracle};
