//! Configuration errors for the genetic engine.

use thiserror::Error;

/// Wiring mistakes that make an engine unusable.
///
/// These are rejected when the engine is built, never during a generation.
/// Degenerate inputs (an empty population, a mating pool too small for the
/// chosen crossover) are not errors: the affected generation simply yields
/// an empty population.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneticError {
    #[error("fitness oracle not defined")]
    MissingFitnessOracle,

    #[error("mutation oracle not defined")]
    MissingMutationOracle,

    #[error("mutation_factor must be at least 1, got {0}")]
    InvalidMutationFactor(usize),

    #[error("number_of_children must be at least 1, got {0}")]
    InvalidOffspringCount(usize),
}

pub type Result<T> = std::result::Result<T, GeneticError>;
