//! Generational genetic-algorithm engine.
//!
//! Evolves populations of genomes (any `Vec<T>` with `T: Clone + PartialEq`)
//! against a caller-supplied fitness oracle:
//!
//! - **Genetic engine** ([`genetic`]): ranking, mating-pool selection,
//!   crossover, mutation, and optional elitist carry-forward, advanced one
//!   generation per call by the caller's own loop.
//! - **Sequence utilities** ([`seq`]): halving, batching, n-way slicing,
//!   and a duplicate-free shuffle.
//! - **Randomness** ([`random`]): the seeded generator every run draws
//!   from, so runs replay exactly under a fixed seed.
//!
//! The engine is single-threaded and synchronous. It does not decide
//! convergence; it exposes the best score, best genome, and generation
//! count so the caller can.

pub mod genetic;
pub mod random;
pub mod seq;
