//! Capacity-constrained assignment of stops to vehicles.
//!
//! - [`greedy_assignment`] — Largest demand first, into the least-loaded vehicle that fits
//! - [`cluster_first_assignment`] — Geographic clusters, one per vehicle, then capacity check
//!
//! Both produce an [`Assignment`]: per-vehicle stop-index lists (not yet
//! sequenced) plus the stops that fit nowhere. Every stop index appears
//! exactly once across the routes and the unassigned list.

mod cluster_first;
mod greedy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::models::Fleet;

pub use cluster_first::cluster_first_assignment;
pub use greedy::greedy_assignment;

/// Available assignment heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMethod {
    /// Largest demand first, balancing load.
    Greedy,
    /// Geographic compactness first.
    ClusterFirst,
}

impl AssignmentMethod {
    /// All methods, in comparison order.
    pub const ALL: [AssignmentMethod; 2] = [AssignmentMethod::Greedy, AssignmentMethod::ClusterFirst];

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::ClusterFirst => "cluster_first",
        }
    }
}

impl fmt::Display for AssignmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentMethod {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(Self::Greedy),
            "cluster_first" => Ok(Self::ClusterFirst),
            other => Err(RoutingError::UnknownMethod {
                kind: "assignment",
                name: other.to_string(),
            }),
        }
    }
}

/// Stops assigned to one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedRoute {
    /// Vehicle ID.
    pub vehicle_id: usize,
    /// Stop indices in assignment order.
    pub stops: Vec<usize>,
    /// Summed demand.
    pub load: i32,
    /// Vehicle capacity.
    pub capacity: i32,
    /// `load / capacity`.
    pub utilization: f64,
}

/// Result of an assignment heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// One entry per vehicle, in fleet order.
    pub routes: Vec<AssignedRoute>,
    /// Stop indices that fit in no vehicle.
    pub unassigned: Vec<usize>,
    /// Aggregate distance; always zero since assignment does not sequence.
    pub total_distance: f64,
}

impl Assignment {
    /// Snapshots the fleet's current run state.
    pub(crate) fn from_fleet(fleet: &Fleet, unassigned: Vec<usize>) -> Self {
        let routes = fleet
            .vehicles()
            .iter()
            .map(|v| AssignedRoute {
                vehicle_id: v.id(),
                stops: v.assigned().to_vec(),
                load: v.load(),
                capacity: v.capacity(),
                utilization: v.utilization(),
            })
            .collect();
        Self {
            routes,
            unassigned,
            total_distance: 0.0,
        }
    }

    /// Number of stops placed on some vehicle.
    pub fn num_assigned(&self) -> usize {
        self.routes.iter().map(|r| r.stops.len()).sum()
    }

    /// Number of unassigned stops.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// The route of a vehicle, by ID.
    pub fn route(&self, vehicle_id: usize) -> Option<&AssignedRoute> {
        self.routes.iter().find(|r| r.vehicle_id == vehicle_id)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::GeoStop;

    /// Checks that every index in `0..n` appears exactly once across routes
    /// and the unassigned list.
    pub fn is_complete_partition(assignment: &super::Assignment, n: usize) -> bool {
        let mut seen = vec![0usize; n];
        let all = assignment
            .routes
            .iter()
            .flat_map(|r| r.stops.iter())
            .chain(assignment.unassigned.iter());
        for &i in all {
            if i >= n {
                return false;
            }
            seen[i] += 1;
        }
        seen.iter().all(|&c| c == 1)
    }

    pub fn stops_with_demands(demands: &[i32]) -> Vec<GeoStop> {
        demands
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                GeoStop::new(i, -23.5 + 0.01 * i as f64, -46.6, format!("Stop {i}"), d)
            })
            .collect()
    }
}
