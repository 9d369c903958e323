//! Delivery stop type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;

/// A geocoded delivery stop with aggregate package demand.
///
/// Stops are immutable once built. Routing code never holds references to
/// stops; it works on their positions in the stop list (see
/// [`DistanceMatrix`](crate::distance::DistanceMatrix)).
///
/// # Examples
///
/// ```
/// use fleet_routing::models::GeoStop;
///
/// let stop = GeoStop::new(7, -23.55, -46.63, "Rua Augusta, 100", 3);
/// assert_eq!(stop.id(), 7);
/// assert_eq!(stop.demand(), 3);
/// assert_eq!(stop.address(), "Rua Augusta, 100");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoStop {
    id: usize,
    latitude: f64,
    longitude: f64,
    address: String,
    demand: i32,
}

impl GeoStop {
    /// Creates a new stop. Coordinates are in degrees.
    pub fn new(
        id: usize,
        latitude: f64,
        longitude: f64,
        address: impl Into<String>,
        demand: i32,
    ) -> Self {
        Self {
            id,
            latitude,
            longitude,
            address: address.into(),
            demand,
        }
    }

    /// Caller-assigned stop ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Human-readable address label.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Number of packages to deliver here.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Great-circle distance to another stop in kilometers.
    pub fn distance_to(&self, other: &GeoStop) -> f64 {
        haversine_km(
            (self.latitude, self.longitude),
            (other.latitude, other.longitude),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = GeoStop::new(1, 10.0, 20.0, "A", 5);
        assert_eq!(s.id(), 1);
        assert_eq!(s.latitude(), 10.0);
        assert_eq!(s.longitude(), 20.0);
        assert_eq!(s.address(), "A");
        assert_eq!(s.demand(), 5);
    }

    #[test]
    fn test_stop_distance_same_point() {
        let a = GeoStop::new(1, -23.5, -46.6, "A", 1);
        let b = GeoStop::new(2, -23.5, -46.6, "A", 2);
        assert_eq!(a.distance_to(&b), 0.0);
    }

    #[test]
    fn test_stop_distance_symmetric() {
        let a = GeoStop::new(1, -23.5, -46.6, "A", 1);
        let b = GeoStop::new(2, -22.9, -43.2, "B", 1);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
        // Sao Paulo to Rio is roughly 350 km as the crow flies
        assert!(a.distance_to(&b) > 300.0 && a.distance_to(&b) < 400.0);
    }
}
