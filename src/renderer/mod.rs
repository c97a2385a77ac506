//! ASCII rendering module
//!
//! Projects the continuous arena onto a fixed grid of single-byte tags.

pub mod grid;
pub mod raster;

pub use grid::{EMPTY_TAG, Grid, SHIP_TAG, obstacle_tag};
pub use raster::rasterize;
