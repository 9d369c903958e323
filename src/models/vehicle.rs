//! Vehicle type with capacity and per-run assignment state.

use serde::{Deserialize, Serialize};

/// Static vehicle description as supplied by fleet configuration.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::VehicleConfig;
///
/// let cfg = VehicleConfig::new(1, "Van 1", 40);
/// assert_eq!(cfg.capacity, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    /// Vehicle ID, unique within a fleet.
    pub id: usize,
    /// Display name.
    pub name: String,
    /// Maximum number of packages carried.
    pub capacity: i32,
}

impl VehicleConfig {
    /// Creates a vehicle configuration record.
    pub fn new(id: usize, name: impl Into<String>, capacity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
        }
    }
}

/// A vehicle together with the stops assigned to it in the current run.
///
/// `load` always equals the summed demand of `assigned`, and never exceeds
/// `capacity`: [`add_stop`](Vehicle::add_stop) refuses stops that would
/// overflow. [`reset`](Vehicle::reset) clears the run state so the same fleet
/// can be reused across assignment methods.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Vehicle;
///
/// let mut v = Vehicle::new(0, "Van", 10);
/// assert!(v.add_stop(3, 6));
/// assert!(!v.add_stop(4, 5));
/// assert_eq!(v.load(), 6);
/// assert_eq!(v.assigned(), &[3]);
///
/// v.reset();
/// assert_eq!(v.load(), 0);
/// assert!(v.assigned().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: usize,
    name: String,
    capacity: i32,
    load: i32,
    assigned: Vec<usize>,
    total_distance: f64,
}

impl Vehicle {
    /// Creates an empty vehicle.
    pub fn new(id: usize, name: impl Into<String>, capacity: i32) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            load: 0,
            assigned: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Current load (summed demand of assigned stops).
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Assigned stop indices in current visiting order.
    pub fn assigned(&self) -> &[usize] {
        &self.assigned
    }

    /// Closed-loop distance of the current order, as last computed.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if `demand` more packages still fit. Negative demand
    /// never fits.
    pub fn can_accept(&self, demand: i32) -> bool {
        demand >= 0 && i64::from(self.load) + i64::from(demand) <= i64::from(self.capacity)
    }

    /// Assigns a stop if it fits. Returns `false` and leaves the vehicle
    /// untouched otherwise.
    pub fn add_stop(&mut self, stop_index: usize, demand: i32) -> bool {
        if !self.can_accept(demand) {
            return false;
        }
        self.assigned.push(stop_index);
        self.load += demand;
        true
    }

    /// Fraction of capacity in use, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0 {
            f64::from(self.load) / f64::from(self.capacity)
        } else {
            0.0
        }
    }

    /// Clears load, assigned stops and distance.
    pub fn reset(&mut self) {
        self.load = 0;
        self.assigned = Vec::new();
        self.total_distance = 0.0;
    }

    /// Replaces the visiting order. The stop set must be unchanged, so the
    /// load stays valid.
    pub(crate) fn set_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.assigned.len());
        self.assigned = order;
    }

    pub(crate) fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }
}

impl From<VehicleConfig> for Vehicle {
    fn from(cfg: VehicleConfig) -> Self {
        Self::new(cfg.id, cfg.name, cfg.capacity)
    }
}
