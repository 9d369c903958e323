//! Plain report records handed to persistence and reporting layers.
//!
//! Everything here is owned numeric/string data with `Serialize`; no engine
//! types leak through.

use serde::Serialize;

use crate::assignment::AssignmentMethod;
use crate::optimizer::SequencingMethod;

/// One vehicle's route in a [`RoutePlan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Vehicle ID.
    pub vehicle_id: usize,
    /// Vehicle display name.
    pub vehicle_name: String,
    /// Stop indices in visiting order.
    pub stops: Vec<usize>,
    /// Closed-loop distance in km.
    pub distance: f64,
    /// Summed demand of the route.
    pub load: i32,
    /// Vehicle capacity.
    pub capacity: i32,
    /// `load / capacity`.
    pub utilization: f64,
    /// Number of stops on the route.
    pub stops_count: usize,
}

/// Current routes of the whole fleet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// One entry per vehicle, in fleet order.
    pub routes: Vec<RouteSummary>,
    /// Summed route distance in km.
    pub total_distance: f64,
    /// Stop indices that fit in no vehicle.
    pub unassigned: Vec<usize>,
    /// Number of unassigned stops.
    pub unassigned_count: usize,
}

/// Per-vehicle line of [`FleetStatistics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleStatistics {
    /// Vehicle ID.
    pub id: usize,
    /// Vehicle display name.
    pub name: String,
    /// Number of assigned stops.
    pub stops: usize,
    /// Summed demand of assigned stops.
    pub load: i32,
    /// Vehicle capacity.
    pub capacity: i32,
    /// `load / capacity`.
    pub utilization: f64,
    /// Closed-loop route distance in km.
    pub distance: f64,
}

/// Fleet-wide aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetStatistics {
    /// Number of vehicles in the fleet.
    pub total_vehicles: usize,
    /// Stops placed on a vehicle.
    pub total_stops: usize,
    /// Stops left out of the plan.
    pub unassigned_stops: usize,
    /// Summed route distance in km.
    pub total_distance_km: f64,
    /// `total_distance_km` over the vehicle count, zero for an empty fleet.
    pub average_distance_per_vehicle: f64,
    /// Summed vehicle capacity.
    pub total_capacity: i64,
    /// Summed vehicle load.
    pub total_load: i64,
    /// `total_load / total_capacity`, zero for an empty fleet.
    pub overall_utilization: f64,
    /// Time spent producing the current plan.
    pub optimization_secs: f64,
    /// Per-vehicle breakdown, in fleet order.
    pub vehicles: Vec<VehicleStatistics>,
}

/// A stop within a [`DetailedRoute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStop {
    /// 1-based visiting position.
    pub order: usize,
    /// Position of the stop in the optimizer's stop list.
    pub stop_index: usize,
    /// Caller-assigned stop ID.
    pub stop_id: usize,
    /// Address label.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Packages delivered here.
    pub demand: i32,
    /// Distance to the next stop; the last stop measures back to the first.
    pub distance_to_next: f64,
}

/// Fully expanded route of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedRoute {
    /// Vehicle ID.
    pub vehicle_id: usize,
    /// Vehicle display name.
    pub vehicle_name: String,
    /// Vehicle capacity.
    pub capacity: i32,
    /// Summed demand of the route.
    pub load: i32,
    /// `load / capacity`.
    pub utilization: f64,
    /// Closed-loop route distance in km.
    pub total_distance: f64,
    /// Stops in visiting order.
    pub stops: Vec<RouteStop>,
}

/// Assignment method run without sequencing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodRun {
    /// Assignment method.
    pub method: AssignmentMethod,
    /// Distance with stops in assignment order.
    pub total_distance: f64,
    /// Number of unassigned stops.
    pub unassigned: usize,
    /// Wall time of the assignment.
    pub elapsed_secs: f64,
}

/// Assignment method run followed by 2-opt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedRun {
    /// Assignment method.
    pub method: AssignmentMethod,
    /// Distance after 2-opt, in km.
    pub total_distance: f64,
    /// Number of unassigned stops.
    pub unassigned: usize,
    /// Percent reduction relative to the unsequenced run.
    pub improvement: f64,
    /// Wall time of assignment plus 2-opt.
    pub elapsed_secs: f64,
}

/// Side-by-side results of both assignment methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentComparison {
    /// Greedy assignment before sequencing.
    pub greedy: MethodRun,
    /// Cluster-first assignment before sequencing.
    pub cluster_first: MethodRun,
    /// Greedy assignment after 2-opt.
    pub greedy_optimized: OptimizedRun,
    /// Cluster-first assignment after 2-opt.
    pub cluster_first_optimized: OptimizedRun,
}

impl AssignmentComparison {
    /// Optimized runs, best first: fewer unassigned stops wins, then shorter
    /// total distance.
    pub fn ranking(&self) -> Vec<&OptimizedRun> {
        let mut runs = vec![&self.greedy_optimized, &self.cluster_first_optimized];
        runs.sort_by(|a, b| {
            a.unassigned
                .cmp(&b.unassigned)
                .then(a.total_distance.total_cmp(&b.total_distance))
        });
        runs
    }

    /// The top-ranked method.
    pub fn best(&self) -> AssignmentMethod {
        self.ranking()[0].method
    }
}

/// One leg of a closed tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSegment {
    /// ID of the departure stop.
    pub from_id: usize,
    /// ID of the arrival stop.
    pub to_id: usize,
    /// Address of the departure stop.
    pub from_address: String,
    /// Address of the arrival stop.
    pub to_address: String,
    /// Leg length in km.
    pub distance: f64,
}

/// A sequenced tour as produced by [`TourSequencer::optimize`](super::TourSequencer::optimize).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencedTour {
    /// Method that produced the tour.
    pub method: SequencingMethod,
    /// Stop indices in visiting order.
    pub tour: Vec<usize>,
    /// Closed-loop distance in km.
    pub distance: f64,
    /// Wall time of the run.
    pub elapsed_secs: f64,
}

/// Result of one method in a [`SequencerComparison`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerRun {
    /// Stop indices in visiting order.
    pub tour: Vec<usize>,
    /// Closed-loop distance in km.
    pub distance: f64,
    /// Wall time of the run.
    pub elapsed_secs: f64,
    /// Percent reduction relative to nearest neighbor; `None` for the
    /// nearest-neighbor baseline itself.
    pub improvement: Option<f64>,
}

/// Nearest neighbor vs 2-opt vs genetic search on one tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencerComparison {
    /// Nearest-neighbor baseline.
    pub nearest_neighbor: SequencerRun,
    /// 2-opt seeded with the baseline tour.
    pub two_opt: SequencerRun,
    /// Skipped (`None`) above the configured stop limit.
    pub genetic: Option<SequencerRun>,
}

/// Percent by which `after` improves on `before`; zero when `before` is zero.
pub(crate) fn improvement_percent(before: f64, after: f64) -> f64 {
    if before > 0.0 {
        (before - after) / before * 100.0
    } else {
        0.0
    }
}
