//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - Stable iteration order (obstacle spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, is_collision};
pub use rng::{PcgSource, UniformSource};
pub use state::{Arena, Body};
