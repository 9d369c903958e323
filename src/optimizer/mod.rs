//! Tour sequencing and fleet orchestration.
//!
//! - [`TourSequencer`] — One tour over every stop: method dispatch, comparison, segments
//! - [`FleetRouteOptimizer`] — Assignment, per-vehicle sequencing, statistics, method comparison
//! - [`SequencerConfig`], [`OptimizerConfig`] — Serde-backed settings with defaults
//! - report records — Plain serializable results ([`RoutePlan`], [`FleetStatistics`], ...)

mod config;
mod fleet;
mod report;
mod sequencer;

pub use config::{OptimizerConfig, SequencerConfig};
pub use fleet::FleetRouteOptimizer;
pub use report::{
    AssignmentComparison, DetailedRoute, FleetStatistics, MethodRun, OptimizedRun, RoutePlan,
    RouteStop, RouteSummary, SequencedTour, SequencerComparison, SequencerRun, TourSegment,
    VehicleStatistics,
};
pub use sequencer::{SequencingMethod, TourSequencer};
