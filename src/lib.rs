//! Torus Dodge - a ship dodging drifting obstacles on a wrap-around field
//!
//! Core modules:
//! - `sim`: Simulation (bodies, collisions, arena stepping)
//! - `renderer`: ASCII grid rasterization
//! - `strategy`: Per-tick acceleration policies
//! - `runner`: Episode loop driving an arena to its end
//! - `settings`: Driver parameters
//! - `stats`: Per-run episode totals

pub mod error;
pub mod renderer;
pub mod runner;
pub mod settings;
pub mod sim;
pub mod stats;
pub mod strategy;

pub use error::Error;
pub use settings::Settings;
pub use stats::RunStats;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (seconds per tick)
    pub const SIM_DT: f64 = 0.1;

    /// Field dimensions
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 300.0;
    /// Obstacles spawned per episode
    pub const OBSTACLE_COUNT: usize = 5;

    /// Render grid resolution (cells)
    pub const GRID_WIDTH: usize = 80;
    pub const GRID_HEIGHT: usize = 30;

    /// Ship radius as a fraction of the smaller field dimension
    pub const SHIP_RADIUS_DIVISOR: f64 = 20.0;
    /// Obstacle max speed per axis as a fraction of the smaller field dimension
    pub const OBSTACLE_SPEED_DIVISOR: f64 = 4.0;
    /// Obstacle max radius as a fraction of the smaller field dimension
    pub const OBSTACLE_RADIUS_DIVISOR: f64 = 3.0;
    pub const OBSTACLE_MIN_RADIUS: f64 = 1.0;

    /// Consecutive rejected samples allowed for one obstacle slot
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}

/// Square of a value
#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Fold a coordinate that overshot `[0, extent)` by at most one extent back into range.
///
/// Only a single correction is applied, so a displacement of a full extent or
/// more in one step is not normalized.
#[inline]
pub fn wrap_once(value: f64, extent: f64) -> f64 {
    if value >= extent {
        value - extent
    } else if value < 0.0 {
        // A tiny negative overshoot can round up to exactly `extent`
        let wrapped = value + extent;
        if wrapped >= extent { 0.0 } else { wrapped }
    } else {
        value
    }
}

/// Shortest signed delta from `from` to `to` on a ring of length `extent`
#[inline]
pub fn shortest_delta(from: f64, to: f64, extent: f64) -> f64 {
    let mut delta = (to - from) % extent;
    if delta > extent / 2.0 {
        delta -= extent;
    } else if delta < -extent / 2.0 {
        delta += extent;
    }
    delta
}
