//! Single-tour sequencing with method dispatch and comparison.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::report::{
    improvement_percent, SequencedTour, SequencerComparison, SequencerRun, TourSegment,
};
use super::SequencerConfig;
use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::ga::{genetic_search, rng_from_seed, GeneticConfig};
use crate::local_search::two_opt_improve;
use crate::models::GeoStop;

/// Tour sequencing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencingMethod {
    /// Greedy nearest-neighbor construction.
    NearestNeighbor,
    /// 2-opt local search seeded by nearest neighbor or the current order.
    TwoOpt,
    /// Genetic search.
    Genetic,
}

impl SequencingMethod {
    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest_neighbor",
            Self::TwoOpt => "two_opt",
            Self::Genetic => "genetic",
        }
    }
}

impl fmt::Display for SequencingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SequencingMethod {
    type Err = RoutingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "nearest_neighbor" => Ok(Self::NearestNeighbor),
            "two_opt" => Ok(Self::TwoOpt),
            "genetic" => Ok(Self::Genetic),
            other => Err(RoutingError::UnknownMethod {
                kind: "sequencing",
                name: other.to_string(),
            }),
        }
    }
}

/// Sequences a single tour over every stop of a distance matrix.
///
/// The sequencer borrows the matrix, so one matrix can serve any number of
/// sequencing runs. [`optimize`](TourSequencer::optimize) remembers its last
/// result for [`segments`](TourSequencer::segments)-style reporting.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoStop;
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::optimizer::{SequencingMethod, TourSequencer};
///
/// let stops = vec![
///     GeoStop::new(1, 0.0, 0.0, "A", 1),
///     GeoStop::new(2, 0.0, 0.02, "C", 1),
///     GeoStop::new(3, 0.0, 0.01, "B", 1),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let mut sequencer = TourSequencer::new(&dm);
///
/// let best = sequencer.optimize(SequencingMethod::TwoOpt).unwrap();
/// assert_eq!(best.tour, vec![0, 2, 1]);
///
/// assert!(sequencer.optimize_by_name("simulated_annealing").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TourSequencer<'a> {
    distances: &'a DistanceMatrix,
    config: SequencerConfig,
    best: Option<SequencedTour>,
}

impl<'a> TourSequencer<'a> {
    /// Creates a sequencer with default settings.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            config: SequencerConfig::default(),
            best: None,
        }
    }

    /// Replaces the settings.
    pub fn with_config(mut self, config: SequencerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Nearest-neighbor tour from `start`.
    pub fn nearest_neighbor(&self, start: usize) -> Result<(Vec<usize>, f64)> {
        nearest_neighbor(start, self.distances)
    }

    /// 2-opt from `initial`, or from the nearest-neighbor tour at stop 0 when
    /// no initial tour is given. Uses the configured scan cap.
    pub fn two_opt(&self, initial: Option<&[usize]>) -> Result<(Vec<usize>, f64)> {
        self.two_opt_with(initial, self.config.two_opt_max_iterations)
    }

    /// 2-opt with an explicit scan cap.
    pub fn two_opt_with(
        &self,
        initial: Option<&[usize]>,
        max_iterations: usize,
    ) -> Result<(Vec<usize>, f64)> {
        let seed = match initial {
            Some(tour) => {
                if let Some(&bad) = tour.iter().find(|&&i| i >= self.distances.size()) {
                    return Err(RoutingError::IndexOutOfRange {
                        index: bad,
                        size: self.distances.size(),
                    });
                }
                tour.to_vec()
            }
            None => self.nearest_neighbor(0)?.0,
        };
        Ok(two_opt_improve(&seed, self.distances, max_iterations))
    }

    /// Genetic search over all stops, seeded from `config.seed`.
    pub fn genetic(&self, config: &GeneticConfig) -> Result<(Vec<usize>, f64)> {
        let mut rng = rng_from_seed(config.seed);
        self.genetic_with_rng(config, &mut rng)
    }

    /// Genetic search over all stops with a caller-supplied generator.
    pub fn genetic_with_rng<R: Rng>(
        &self,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<(Vec<usize>, f64)> {
        let stops: Vec<usize> = (0..self.distances.size()).collect();
        genetic_search(&stops, self.distances, config, rng)
    }

    /// Runs `method` with the configured parameters and remembers the result.
    pub fn optimize(&mut self, method: SequencingMethod) -> Result<&SequencedTour> {
        let started = Instant::now();
        let (tour, distance) = match method {
            SequencingMethod::NearestNeighbor => self.nearest_neighbor(0)?,
            SequencingMethod::TwoOpt => self.two_opt(None)?,
            SequencingMethod::Genetic => self.genetic(&self.config.genetic)?,
        };
        let elapsed_secs = started.elapsed().as_secs_f64();
        info!(%method, stops = tour.len(), distance, elapsed_secs, "tour optimized");

        Ok(&*self.best.insert(SequencedTour {
            method,
            tour,
            distance,
            elapsed_secs,
        }))
    }

    /// Parses `name` and runs [`optimize`](Self::optimize).
    pub fn optimize_by_name(&mut self, name: &str) -> Result<&SequencedTour> {
        let method = name.parse()?;
        self.optimize(method)
    }

    /// Result of the last [`optimize`](Self::optimize) call.
    pub fn best(&self) -> Option<&SequencedTour> {
        self.best.as_ref()
    }

    /// Compares nearest neighbor, 2-opt seeded with its tour, and (for small
    /// instances) genetic search.
    pub fn compare_methods(&self) -> Result<SequencerComparison> {
        let started = Instant::now();
        let (nn_tour, nn_distance) = self.nearest_neighbor(0)?;
        let nearest = SequencerRun {
            tour: nn_tour,
            distance: nn_distance,
            elapsed_secs: started.elapsed().as_secs_f64(),
            improvement: None,
        };

        let started = Instant::now();
        let (opt_tour, opt_distance) = self.two_opt(Some(nearest.tour.as_slice()))?;
        let two_opt = SequencerRun {
            tour: opt_tour,
            distance: opt_distance,
            elapsed_secs: started.elapsed().as_secs_f64(),
            improvement: Some(improvement_percent(nn_distance, opt_distance)),
        };

        let genetic = if self.distances.size() <= self.config.genetic_stop_limit {
            let started = Instant::now();
            let (ga_tour, ga_distance) = self.genetic(&self.config.comparison_genetic)?;
            Some(SequencerRun {
                tour: ga_tour,
                distance: ga_distance,
                elapsed_secs: started.elapsed().as_secs_f64(),
                improvement: Some(improvement_percent(nn_distance, ga_distance)),
            })
        } else {
            debug!(
                stops = self.distances.size(),
                limit = self.config.genetic_stop_limit,
                "skipping genetic search in comparison"
            );
            None
        };

        Ok(SequencerComparison {
            nearest_neighbor: nearest,
            two_opt,
            genetic,
        })
    }

    /// Legs of a closed tour with stop labels. `stops` must be the list the
    /// matrix was built from.
    pub fn segments(&self, tour: &[usize], stops: &[GeoStop]) -> Result<Vec<TourSegment>> {
        if stops.len() != self.distances.size() {
            return Err(RoutingError::invalid(format!(
                "{} stops given for a {}-stop distance matrix",
                stops.len(),
                self.distances.size()
            )));
        }
        if let Some(&bad) = tour.iter().find(|&&i| i >= stops.len()) {
            return Err(RoutingError::IndexOutOfRange {
                index: bad,
                size: stops.len(),
            });
        }

        let n = tour.len();
        Ok((0..n)
            .map(|k| {
                let from = tour[k];
                let to = tour[(k + 1) % n];
                TourSegment {
                    from_id: stops[from].id(),
                    to_id: stops[to].id(),
                    from_address: stops[from].address().to_string(),
                    to_address: stops[to].address().to_string(),
                    distance: self.distances.get(from, to),
                }
            })
            .collect())
    }
}
