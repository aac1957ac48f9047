//! Planar primitives for the decomposition pipeline.
//!
//! Purpose
//! - `orient`: the orientation determinant and the sweep order every stage shares.
//! - `types`: the validated, counterclockwise `Polygon`.
//! - `rand`: reproducible random simple polygons for tests, benches and the CLI.
//!
//! Conventions
//! - Points are `nalgebra::Point2<f64>`; equality is exact.
//! - "Above" means larger y, with smaller x winning ties (see `orient::above`).

pub mod orient;
pub mod rand;
mod types;

pub use orient::{above, orientation, signed_area, sweep_cmp};
pub use types::Polygon;

/// A point in the plane.
pub type Point = nalgebra::Point2<f64>;
