//! Driver settings
//!
//! Defaults reproduce the classic run: 100 episodes of 5 obstacles on an
//! 800x300 field, ticking every 0.1 s and drawn on an 80x30 grid. A JSON file
//! named by `TORUS_DODGE_SETTINGS` may override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Error;
use crate::strategy::StrategyKind;

/// Environment variable naming an optional settings file
pub const SETTINGS_ENV: &str = "TORUS_DODGE_SETTINGS";

/// Parameters for a run of episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Episodes to play
    pub episodes: u32,
    /// Obstacles per arena
    pub obstacles: usize,

    // === Field ===
    pub width: f64,
    pub height: f64,
    /// Acceleration scale (0 = smaller field dimension)
    pub accel: f64,
    /// Seconds per tick; also the real-time delay between rendered frames
    pub dt: f64,
    /// Stop an episode after this many ticks even without a collision
    pub max_ticks: Option<u64>,

    // === Rendering ===
    /// Draw frames and pace them in real time
    pub render: bool,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Pause before each episode (milliseconds)
    pub episode_pause_ms: u64,

    // === Control ===
    pub strategy: StrategyKind,
    /// RNG seed (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            episodes: 100,
            obstacles: OBSTACLE_COUNT,

            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            accel: 0.0,
            dt: SIM_DT,
            max_ticks: None,

            render: true,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            episode_pause_ms: 1000,

            strategy: StrategyKind::Idle,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `TORUS_DODGE_SETTINGS`, or use defaults
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !self.accel.is_finite() {
            return Err(Error::InvalidSettings(format!(
                "accel must be finite, got {}",
                self.accel
            )));
        }
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(Error::InvalidSettings(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.obstacles, 5);
        assert_eq!((settings.grid_width, settings.grid_height), (80, 30));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "obstacles": 9, "strategy": "evade", "seed": 7 }"#).unwrap();
        assert_eq!(settings.obstacles, 9);
        assert_eq!(settings.strategy, StrategyKind::Evade);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.width, ARENA_WIDTH);
        assert_eq!(settings.dt, SIM_DT);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            episodes: 3,
            max_ticks: Some(500),
            render: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_validate_rejects() {
        let bad = [
            Settings {
                width: 0.0,
                ..Default::default()
            },
            Settings {
                height: f64::INFINITY,
                ..Default::default()
            },
            Settings {
                dt: -0.1,
                ..Default::default()
            },
            Settings {
                accel: f64::NAN,
                ..Default::default()
            },
            Settings {
                grid_height: 0,
                ..Default::default()
            },
        ];
        for settings in bad {
            assert!(matches!(settings.validate(), Err(Error::InvalidSettings(_))));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/torus-dodge.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
