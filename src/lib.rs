//! # fleet-routing
//!
//! Capacitated multi-vehicle routing for delivery stops given by latitude and
//! longitude: great-circle distances, capacity-aware assignment of stops to
//! vehicles, and per-vehicle tour sequencing.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoStop, Vehicle, Fleet)
//! - [`distance`] — Haversine distance and the dense distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour improvement
//! - [`ga`] — Genetic search over tour permutations
//! - [`assignment`] — Greedy-by-demand and cluster-first capacity assignment
//! - [`optimizer`] — Single-tour sequencer and fleet route optimizer
//!
//! ## Example
//!
//! ```
//! use fleet_routing::assignment::AssignmentMethod;
//! use fleet_routing::models::{Fleet, GeoStop, VehicleConfig};
//! use fleet_routing::optimizer::{FleetRouteOptimizer, SequencingMethod};
//!
//! let stops = vec![
//!     GeoStop::new(1, -23.5505, -46.6333, "Centro", 4),
//!     GeoStop::new(2, -23.5615, -46.6833, "Pinheiros", 3),
//!     GeoStop::new(3, -23.5870, -46.6170, "Vila Mariana", 5),
//!     GeoStop::new(4, -23.5670, -46.6500, "Jardins", 2),
//!     GeoStop::new(5, -23.6100, -46.5850, "Moema", 6),
//! ];
//! let fleet = Fleet::new(vec![
//!     VehicleConfig::new(1, "Van 1", 10),
//!     VehicleConfig::new(2, "Van 2", 10),
//! ]).unwrap();
//!
//! let mut optimizer = FleetRouteOptimizer::new(stops, fleet).unwrap();
//! optimizer.assign(AssignmentMethod::ClusterFirst);
//! let plan = optimizer.optimize_routes(SequencingMethod::TwoOpt).unwrap();
//!
//! let placed: usize = plan.routes.iter().map(|r| r.stops_count).sum();
//! assert_eq!(placed + plan.unassigned_count, 5);
//! ```

pub mod assignment;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use error::{Result, RoutingError};
