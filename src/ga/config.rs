//! Genetic search parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Parameters of [`genetic_search`](super::genetic_search).
///
/// # Examples
///
/// ```
/// use fleet_routing::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_seed(7);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.elite_size, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Probability in `[0, 1]` that a child gets a swap mutation.
    pub mutation_rate: f64,
    /// Best individuals copied unchanged into the next generation.
    pub elite_size: usize,
    /// Individuals sampled per tournament (capped at the population size).
    pub tournament_size: usize,
    /// Seed for the random source. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.02,
            elite_size: 10,
            tournament_size: 5,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, size: usize) -> Self {
        self.elite_size = size;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the parameters describe a runnable search.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RoutingError::invalid("population size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(RoutingError::invalid(format!(
                "mutation rate {} is outside [0, 1]",
                self.mutation_rate
            )));
        }
        if self.tournament_size == 0 {
            return Err(RoutingError::invalid("tournament size must be at least 1"));
        }
        Ok(())
    }
}
