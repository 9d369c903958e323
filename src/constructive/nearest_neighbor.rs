//! Nearest-neighbor tour construction.
//!
//! Starting from a given stop, repeatedly move to the closest unvisited stop
//! until every stop is visited. The tour is closed: the vehicle returns to
//! the start after the last stop.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. Tours are
//! typically 15-25% above optimal, which makes it a good seed for 2-opt.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

/// Builds a tour over every stop in the matrix, starting at `start`.
///
/// Ties are broken by the lowest stop index. Returns the tour and its
/// closed-loop distance. An empty matrix yields an empty tour.
///
/// # Errors
///
/// [`RoutingError::IndexOutOfRange`] if `start` is not a stop of a non-empty
/// matrix.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::DistanceMatrix;
/// use fleet_routing::constructive::nearest_neighbor;
///
/// // Stops on a line at positions 0, 3, 1, 2
/// let pos = [0.0f64, 3.0, 1.0, 2.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// let (tour, dist) = nearest_neighbor(0, &dm).unwrap();
/// assert_eq!(tour, vec![0, 2, 3, 1]);
/// assert_eq!(dist, 6.0);
/// ```
pub fn nearest_neighbor(start: usize, distances: &DistanceMatrix) -> Result<(Vec<usize>, f64)> {
    let n = distances.size();
    if n == 0 {
        return Ok((Vec::new(), 0.0));
    }
    if start >= n {
        return Err(RoutingError::IndexOutOfRange {
            index: start,
            size: n,
        });
    }
    let stops: Vec<usize> = (0..n).collect();
    let tour = nearest_neighbor_subset(&stops, start, distances);
    let dist = distances.tour_distance(&tour);
    Ok((tour, dist))
}

/// Builds a nearest-neighbor tour over a subset of stops.
///
/// `start` is placed first; if it is not part of `stops` it is still visited
/// first. The remaining stops are visited greedily, ties going to the lowest
/// stop index.
pub fn nearest_neighbor_subset(
    stops: &[usize],
    start: usize,
    distances: &DistanceMatrix,
) -> Vec<usize> {
    let mut unvisited: Vec<usize> = stops.iter().copied().filter(|&s| s != start).collect();
    unvisited.sort_unstable();
    unvisited.dedup();

    let mut tour = Vec::with_capacity(unvisited.len() + 1);
    tour.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `unvisited` stays sorted so ties resolve to the lowest index
        if let Ok(pos) = unvisited.binary_search(&next) {
            unvisited.remove(pos);
        }
        tour.push(next);
        current = next;
    }

    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoStop;

    fn line_matrix(pos: &[f64]) -> DistanceMatrix {
        let n = pos.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (pos[i] - pos[j]).abs());
            }
        }
        dm
    }

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_stops(&[
            GeoStop::new(0, 0.0, 0.0, "SW", 1),
            GeoStop::new(1, 0.0, 1.0, "SE", 1),
            GeoStop::new(2, 1.0, 1.0, "NE", 1),
            GeoStop::new(3, 1.0, 0.0, "NW", 1),
        ])
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = line_matrix(&[0.0, 10.0, 1.0]);
        let (tour, dist) = nearest_neighbor(0, &dm).expect("valid start");
        assert_eq!(tour, vec![0, 2, 1]);
        // 0→2 (1) + 2→1 (9) + 1→0 (10)
        assert!((dist - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_unit_square_perimeter() {
        let dm = unit_square();
        let (tour, _) = nearest_neighbor(0, &dm).expect("valid start");
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_other_start() {
        let dm = line_matrix(&[0.0, 1.0, 2.0, 3.0]);
        let (tour, dist) = nearest_neighbor(3, &dm).expect("valid start");
        assert_eq!(tour, vec![3, 2, 1, 0]);
        assert!((dist - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_tie_break_lowest_index() {
        // Stops 1 and 2 are equally far from 0
        let dm = line_matrix(&[0.0, 1.0, -1.0]);
        let (tour, _) = nearest_neighbor(0, &dm).expect("valid start");
        assert_eq!(tour[1], 1);
    }

    #[test]
    fn test_nn_empty_and_single() {
        let (tour, dist) = nearest_neighbor(0, &DistanceMatrix::new(0)).expect("empty");
        assert!(tour.is_empty());
        assert_eq!(dist, 0.0);

        let (tour, dist) = nearest_neighbor(0, &DistanceMatrix::new(1)).expect("single");
        assert_eq!(tour, vec![0]);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let err = nearest_neighbor(5, &line_matrix(&[0.0, 1.0])).unwrap_err();
        assert_eq!(err, RoutingError::IndexOutOfRange { index: 5, size: 2 });
    }

    #[test]
    fn test_nn_deterministic() {
        let dm = line_matrix(&[4.0, 0.5, 9.0, 2.0, 7.5, 3.0]);
        let first = nearest_neighbor(0, &dm).expect("valid");
        for _ in 0..5 {
            assert_eq!(nearest_neighbor(0, &dm).expect("valid"), first);
        }
    }

    #[test]
    fn test_nn_subset_only_visits_subset() {
        let dm = line_matrix(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let tour = nearest_neighbor_subset(&[4, 1, 3], 4, &dm);
        assert_eq!(tour, vec![4, 3, 1]);
    }

    #[test]
    fn test_nn_subset_start_outside() {
        let dm = line_matrix(&[0.0, 1.0, 2.0]);
        let tour = nearest_neighbor_subset(&[2, 1], 0, &dm);
        assert_eq!(tour, vec![0, 1, 2]);
    }
}
