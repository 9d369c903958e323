//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour over all stops, O(n²)
//! - [`nearest_neighbor_subset`] — Same, restricted to one vehicle's stops

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_subset};
