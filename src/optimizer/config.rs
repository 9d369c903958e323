//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::ga::GeneticConfig;

/// Settings for single-tour sequencing with [`TourSequencer`](super::TourSequencer).
///
/// # Examples
///
/// ```
/// use fleet_routing::optimizer::SequencerConfig;
///
/// let config = SequencerConfig::default().with_two_opt_max_iterations(500);
/// assert_eq!(config.two_opt_max_iterations, 500);
/// assert_eq!(config.genetic_stop_limit, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Scan cap for 2-opt.
    pub two_opt_max_iterations: usize,
    /// Genetic parameters used by `optimize(Genetic)`.
    pub genetic: GeneticConfig,
    /// Genetic parameters used by `compare_methods`.
    pub comparison_genetic: GeneticConfig,
    /// `compare_methods` skips the genetic search above this many stops.
    pub genetic_stop_limit: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            two_opt_max_iterations: 1000,
            genetic: GeneticConfig::default(),
            comparison_genetic: GeneticConfig::default()
                .with_population_size(50)
                .with_generations(200),
            genetic_stop_limit: 50,
        }
    }
}

impl SequencerConfig {
    /// Sets the 2-opt scan cap.
    pub fn with_two_opt_max_iterations(mut self, iterations: usize) -> Self {
        self.two_opt_max_iterations = iterations;
        self
    }

    /// Sets the genetic parameters for `optimize`.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Sets the genetic parameters for `compare_methods`.
    pub fn with_comparison_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.comparison_genetic = genetic;
        self
    }

    /// Sets the stop count above which `compare_methods` skips genetic search.
    pub fn with_genetic_stop_limit(mut self, limit: usize) -> Self {
        self.genetic_stop_limit = limit;
        self
    }
}

/// Settings for [`FleetRouteOptimizer`](super::FleetRouteOptimizer).
///
/// # Examples
///
/// ```
/// use fleet_routing::optimizer::OptimizerConfig;
///
/// let config: OptimizerConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
/// assert!(config.parallel);
/// assert_eq!(config.two_opt_max_iterations, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Scan cap for per-vehicle 2-opt.
    pub two_opt_max_iterations: usize,
    /// Genetic parameters for per-vehicle genetic sequencing. With a seed,
    /// each vehicle's generator is derived from it and the vehicle ID.
    pub genetic: GeneticConfig,
    /// Sequence vehicles on the rayon thread pool.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            two_opt_max_iterations: 100,
            genetic: GeneticConfig::default(),
            parallel: false,
        }
    }
}

impl OptimizerConfig {
    /// Sets the per-vehicle 2-opt scan cap.
    pub fn with_two_opt_max_iterations(mut self, iterations: usize) -> Self {
        self.two_opt_max_iterations = iterations;
        self
    }

    /// Sets the per-vehicle genetic parameters.
    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Enables or disables parallel per-vehicle sequencing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
