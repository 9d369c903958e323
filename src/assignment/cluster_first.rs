//! Cluster-first assignment.
//!
//! # Algorithm
//!
//! One cluster is opened per vehicle. Stops are visited in input order:
//! while some cluster is still empty, the stop seeds the first empty one;
//! afterwards it joins the cluster whose members are closest on average
//! (first cluster on ties). Cluster `k` is then loaded onto vehicle `k` in
//! cluster order, and any stop that would overflow the vehicle (or has
//! negative demand) is left unassigned.
//!
//! The heuristic optimizes geographic compactness, not load balance: a
//! dense area can overflow its vehicle while other vehicles stay underused.
//!
//! # Complexity
//!
//! O(n²) distance lookups for n stops.

use tracing::debug;

use super::Assignment;
use crate::distance::DistanceMatrix;
use crate::models::{Fleet, GeoStop};

/// Assigns stops to vehicles by geographic clustering.
///
/// Resets the fleet before assigning. `distances` must be the matrix built
/// from `stops`.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Fleet, GeoStop, VehicleConfig};
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::assignment::cluster_first_assignment;
///
/// // Two neighbourhoods far apart
/// let stops = vec![
///     GeoStop::new(1, 0.0, 0.0, "West 1", 1),
///     GeoStop::new(2, 0.0, 5.0, "East 1", 1),
///     GeoStop::new(3, 0.0, 0.01, "West 2", 1),
///     GeoStop::new(4, 0.0, 5.01, "East 2", 1),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let mut fleet = Fleet::new(vec![
///     VehicleConfig::new(1, "West van", 10),
///     VehicleConfig::new(2, "East van", 10),
/// ]).unwrap();
///
/// let assignment = cluster_first_assignment(&stops, &dm, &mut fleet);
/// assert_eq!(assignment.routes[0].stops, vec![0, 2]);
/// assert_eq!(assignment.routes[1].stops, vec![1, 3]);
/// ```
pub fn cluster_first_assignment(
    stops: &[GeoStop],
    distances: &DistanceMatrix,
    fleet: &mut Fleet,
) -> Assignment {
    fleet.reset();

    let mut unassigned = Vec::new();
    if fleet.is_empty() {
        unassigned.extend(0..stops.len());
        debug!(stops = stops.len(), "cluster-first assignment with no vehicles");
        return Assignment::from_fleet(fleet, unassigned);
    }

    let clusters = build_clusters(stops.len(), fleet.len(), distances);

    for (vehicle, cluster) in fleet.vehicles_mut().iter_mut().zip(&clusters) {
        for &idx in cluster {
            if !vehicle.add_stop(idx, stops[idx].demand()) {
                unassigned.push(idx);
            }
        }
    }

    debug!(
        stops = stops.len(),
        vehicles = fleet.len(),
        unassigned = unassigned.len(),
        "cluster-first assignment finished"
    );
    Assignment::from_fleet(fleet, unassigned)
}

/// Groups stop indices `0..num_stops` into `num_clusters` clusters.
fn build_clusters(
    num_stops: usize,
    num_clusters: usize,
    distances: &DistanceMatrix,
) -> Vec<Vec<usize>> {
    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); num_clusters];

    for stop in 0..num_stops {
        let target = match clusters.iter().position(Vec::is_empty) {
            Some(empty) => empty,
            None => closest_cluster(stop, &clusters, distances),
        };
        clusters[target].push(stop);
    }

    clusters
}

/// Index of the cluster with the lowest mean distance to `stop`.
fn closest_cluster(stop: usize, clusters: &[Vec<usize>], distances: &DistanceMatrix) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (k, members) in clusters.iter().enumerate() {
        let total: f64 = members.iter().map(|&m| distances.get(stop, m)).sum();
        let mean = total / members.len() as f64;
        if mean < best_distance {
            best_distance = mean;
            best = k;
        }
    }
    best
}
