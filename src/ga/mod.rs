//! Genetic search for single-tour sequencing.
//!
//! - [`Chromosome`] — Permutation of stop indices with cached tour distance
//! - [`GeneticConfig`] — Population, generation, mutation, elite and tournament parameters
//! - [`operators`] — Order crossover, swap mutation, tournament selection
//! - [`genetic_search`] — Generational loop with elitism, best-ever tracking

mod chromosome;
mod config;
pub mod operators;
mod search;

pub use chromosome::Chromosome;
pub use config::GeneticConfig;
pub use search::{genetic_search, genetic_search_seeded, rng_from_seed};
