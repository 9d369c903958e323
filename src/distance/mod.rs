//! Distance model.
//!
//! All distances are great-circle (Haversine) approximations in kilometers,
//! precomputed once per stop set into a dense [`DistanceMatrix`].

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
