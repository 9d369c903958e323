//! Dense distance matrix.

use crate::models::GeoStop;

/// A dense n×n distance matrix stored in row-major order.
///
/// Row/column `i` corresponds to the `i`-th stop of the list the matrix was
/// built from. Algorithms in this crate work purely on these indices; mapping
/// indices back to stop IDs is the caller's job.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoStop;
/// use fleet_routing::distance::DistanceMatrix;
///
/// let stops = vec![
///     GeoStop::new(10, 0.0, 0.0, "A", 1),
///     GeoStop::new(11, 0.0, 1.0, "B", 1),
///     GeoStop::new(12, 0.0, 1.0, "B", 2),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
/// assert_eq!(dm.get(1, 2), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Haversine distance matrix for an ordered stop list.
    ///
    /// Each pair is computed once and mirrored, so the result is exactly
    /// symmetric with a zero diagonal.
    pub fn from_stops(stops: &[GeoStop]) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from stop `from` to stop `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from stop `from` to stop `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Closed-loop length of a tour: every consecutive edge plus the edge
    /// from the last stop back to the first.
    ///
    /// Tours with fewer than two stops have length zero.
    ///
    /// ```
    /// use fleet_routing::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::from_data(3, vec![
    ///     0.0, 1.0, 2.0,
    ///     1.0, 0.0, 3.0,
    ///     2.0, 3.0, 0.0,
    /// ]).unwrap();
    /// assert_eq!(dm.tour_distance(&[0, 1, 2]), 6.0);
    /// assert_eq!(dm.tour_distance(&[2]), 0.0);
    /// ```
    pub fn tour_distance(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(tour[tour.len() - 1], tour[0])
    }

    /// Returns the nearest of `candidates` to `from`, first one on ties.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}
