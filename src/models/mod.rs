//! Domain model types for fleet routing.
//!
//! Stops carry coordinates and package demand; vehicles carry a capacity and
//! the mutable state of one assignment run; a fleet is a validated set of
//! vehicles.

mod fleet;
mod stop;
mod vehicle;

pub use fleet::Fleet;
pub use stop::GeoStop;
pub use vehicle::{Vehicle, VehicleConfig};
