//! 2-opt improvement for closed tours.
//!
//! # Algorithm
//!
//! For a tour `t` of length n, consider removing edges `(t[i-1], t[i])` and
//! `(t[j], t[(j+1) % n])` for `1 ≤ i < n-2` and `i+2 ≤ j < n`, and reconnecting
//! by reversing `t[i..=j]`:
//!
//! ```text
//! delta = d(t[i-1], t[j]) + d(t[i], t[j+1]) - d(t[i-1], t[i]) - d(t[j], t[j+1])
//! ```
//!
//! The first move with `delta < 0` is applied and the scan restarts from the
//! beginning of the tour (first-improvement). The search ends when a full scan
//! finds no improving move or when `max_iterations` scans have run. The first
//! stop never moves.
//!
//! The distance never increases between scans. A best-improvement scan or
//! don't-look bits can replace the restart without changing that contract.
//!
//! # Complexity
//!
//! O(n²) per scan, O(n² · max_iterations) worst case.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::debug;

use crate::distance::DistanceMatrix;

/// Minimum gain (km) for a move to count as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Applies first-improvement 2-opt to a closed tour.
///
/// Returns the improved tour and its closed-loop distance. With the first
/// stop pinned, tours of four stops or fewer have no improving move and are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::local_search::two_opt_improve;
///
/// // Five stops on a line at positions 0..=4
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// // 0→2→1→3→4→0 = 10
/// let (tour, dist) = two_opt_improve(&[0, 2, 1, 3, 4], &dm, 100);
/// assert_eq!(tour, vec![0, 2, 4, 3, 1]);
/// assert!((dist - 8.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(
    tour: &[usize],
    distances: &DistanceMatrix,
    max_iterations: usize,
) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    let n = current.len();

    let mut improved = true;
    let mut iterations = 0;

    while improved && iterations < max_iterations {
        improved = false;
        iterations += 1;

        'scan: for i in 1..n.saturating_sub(2) {
            for j in (i + 2)..n {
                if two_opt_delta(&current, distances, i, j) < -IMPROVEMENT_EPSILON {
                    current[i..=j].reverse();
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    let dist = distances.tour_distance(&current);
    debug!(stops = n, iterations, distance = dist, "2-opt finished");
    (current, dist)
}

/// Distance change from reversing `tour[i..=j]` in a closed tour.
fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let prev_i = tour[i - 1];
    let next_j = tour[(j + 1) % n];

    let old_cost = distances.get(prev_i, tour[i]) + distances.get(tour[j], next_j);
    let new_cost = distances.get(prev_i, tour[j]) + distances.get(tour[i], next_j);

    new_cost - old_cost
}
