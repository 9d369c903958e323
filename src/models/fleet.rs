//! Validated collection of vehicles.

use std::collections::HashSet;

use super::{Vehicle, VehicleConfig};
use crate::error::{Result, RoutingError};

/// The set of vehicles available to an optimization run.
///
/// Construction rejects non-positive capacities and duplicate IDs, so every
/// fleet in circulation is usable by the assigners.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::{Fleet, VehicleConfig};
///
/// let fleet = Fleet::new(vec![
///     VehicleConfig::new(1, "Van 1", 10),
///     VehicleConfig::new(2, "Van 2", 15),
/// ]).unwrap();
/// assert_eq!(fleet.len(), 2);
/// assert_eq!(fleet.total_capacity(), 25);
///
/// assert!(Fleet::new(vec![VehicleConfig::new(1, "Broken", 0)]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Builds a fleet from configuration records.
    pub fn new(configs: Vec<VehicleConfig>) -> Result<Self> {
        Self::from_vehicles(configs.into_iter().map(Vehicle::from).collect())
    }

    /// Builds a fleet from vehicles. Any existing run state is cleared.
    pub fn from_vehicles(mut vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for v in &vehicles {
            if v.capacity() <= 0 {
                return Err(RoutingError::invalid(format!(
                    "vehicle {} has capacity {}; capacity must be positive",
                    v.id(),
                    v.capacity()
                )));
            }
            if !seen.insert(v.id()) {
                return Err(RoutingError::invalid(format!(
                    "duplicate vehicle id {}",
                    v.id()
                )));
            }
        }
        vehicles.iter_mut().for_each(Vehicle::reset);
        Ok(Self { vehicles })
    }

    /// Vehicles in configuration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Clears the run state of every vehicle.
    pub fn reset(&mut self) {
        self.vehicles.iter_mut().for_each(Vehicle::reset);
    }

    /// Summed capacity of all vehicles.
    pub fn total_capacity(&self) -> i64 {
        self.vehicles.iter().map(|v| i64::from(v.capacity())).sum()
    }

    /// Summed load of all vehicles.
    pub fn total_load(&self) -> i64 {
        self.vehicles.iter().map(|v| i64::from(v.load())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_new() {
        let fleet = Fleet::new(vec![
            VehicleConfig::new(1, "A", 10),
            VehicleConfig::new(2, "B", 20),
        ])
        .expect("valid fleet");
        assert_eq!(fleet.len(), 2);
        assert!(!fleet.is_empty());
        assert_eq!(fleet.vehicles()[1].name(), "B");
        assert_eq!(fleet.total_capacity(), 30);
        assert_eq!(fleet.total_load(), 0);
    }

    #[test]
    fn test_fleet_rejects_zero_capacity() {
        let err = Fleet::new(vec![VehicleConfig::new(1, "A", 0)]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_fleet_rejects_negative_capacity() {
        assert!(Fleet::new(vec![VehicleConfig::new(1, "A", -5)]).is_err());
    }

    #[test]
    fn test_fleet_rejects_duplicate_ids() {
        let err = Fleet::new(vec![
            VehicleConfig::new(1, "A", 5),
            VehicleConfig::new(1, "B", 5),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate vehicle id 1"));
    }

    #[test]
    fn test_fleet_empty_is_valid() {
        let fleet = Fleet::new(vec![]).expect("empty fleet");
        assert!(fleet.is_empty());
        assert_eq!(fleet.total_capacity(), 0);
    }

    #[test]
    fn test_from_vehicles_clears_state() {
        let mut v = Vehicle::new(1, "A", 5);
        v.add_stop(0, 3);
        let fleet = Fleet::from_vehicles(vec![v]).expect("valid");
        assert_eq!(fleet.vehicles()[0].load(), 0);
    }

    #[test]
    fn test_fleet_config_from_json() {
        let configs: Vec<VehicleConfig> =
            serde_json::from_str(r#"[{"id": 1, "name": "Van", "capacity": 12}]"#)
                .expect("json");
        let fleet = Fleet::new(configs).expect("valid");
        assert_eq!(fleet.vehicles()[0].capacity(), 12);
    }
}
