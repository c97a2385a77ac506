//! Error type shared by arena construction, rendering and settings

use thiserror::Error;

/// Errors raised when building or rendering an arena, or loading settings.
#[derive(Debug, Error)]
pub enum Error {
    /// Field extents must be finite and strictly positive.
    #[error("invalid arena dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
    /// An obstacle slot kept landing on the ship.
    #[error(
        "could not place obstacle {placed} of {requested} clear of the ship after {attempts} attempts"
    )]
    SpawnExhausted {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
    /// Render grids need at least one row and one column.
    #[error("invalid grid resolution {width}x{height}")]
    InvalidResolution { width: usize, height: usize },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}
