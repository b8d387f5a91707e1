//! Distance model.
//!
//! Great-circle (haversine) distance between named points and the
//! open-path score of a visiting order. Everything here is a pure
//! function of the coordinates.

mod city;
mod distance;
mod matrix;

pub use city::City;
pub use distance::{haversine, path_length, EARTH_RADIUS_MILES};
pub use matrix::DistanceMatrix;
