//! Greedy-by-demand assignment.
//!
//! # Algorithm
//!
//! Stops are taken in order of decreasing demand (ties by stop index). Each
//! goes to the vehicle with the smallest current load among those that can
//! still take it (ties by vehicle ID). Stops no vehicle can take, including
//! stops with negative demand, are left unassigned.
//!
//! This is the longest-processing-time rule from bin packing.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n stops and m vehicles.

use tracing::debug;

use super::Assignment;
use crate::models::{Fleet, GeoStop};

/// Assigns stops to vehicles, largest demand first.
///
/// Resets the fleet before assigning. Stop indices refer to positions in
/// `stops`.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Fleet, GeoStop, VehicleConfig};
/// use fleet_routing::assignment::greedy_assignment;
///
/// let stops = vec![
///     GeoStop::new(1, 0.0, 0.0, "A", 15),
///     GeoStop::new(2, 0.0, 0.1, "B", 4),
///     GeoStop::new(3, 0.1, 0.1, "C", 4),
/// ];
/// let mut fleet = Fleet::new(vec![
///     VehicleConfig::new(1, "Van 1", 10),
///     VehicleConfig::new(2, "Van 2", 10),
/// ]).unwrap();
///
/// let assignment = greedy_assignment(&stops, &mut fleet);
/// assert_eq!(assignment.unassigned, vec![0]);
/// assert_eq!(assignment.routes[0].stops, vec![1]);
/// assert_eq!(assignment.routes[1].stops, vec![2]);
/// ```
pub fn greedy_assignment(stops: &[GeoStop], fleet: &mut Fleet) -> Assignment {
    fleet.reset();

    let mut order: Vec<usize> = (0..stops.len()).collect();
    // Stable sort keeps ascending index order among equal demands
    order.sort_by(|&a, &b| stops[b].demand().cmp(&stops[a].demand()));

    let mut unassigned = Vec::new();
    for idx in order {
        let demand = stops[idx].demand();
        let target = fleet
            .vehicles_mut()
            .iter_mut()
            .filter(|v| v.can_accept(demand))
            .min_by_key(|v| (v.load(), v.id()));

        match target {
            Some(vehicle) => {
                vehicle.add_stop(idx, demand);
            }
            None => unassigned.push(idx),
        }
    }

    debug!(
        stops = stops.len(),
        vehicles = fleet.len(),
        unassigned = unassigned.len(),
        "greedy assignment finished"
    );
    Assignment::from_fleet(fleet, unassigned)
}
