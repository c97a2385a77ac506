//! Per-tick acceleration policies for the ship

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shortest_delta;
use crate::sim::Arena;

/// Chooses the ship's acceleration each tick.
///
/// Implementations only observe the arena. The returned vector is
/// conventionally within `[-1, 1]` per axis; the arena scales it by its
/// `accel` without clamping.
pub trait Strategy {
    fn decide(&mut self, arena: &Arena) -> DVec2;
}

/// Never accelerates
#[derive(Debug, Clone, Copy, Default)]
pub struct Idle;

impl Strategy for Idle {
    fn decide(&mut self, _arena: &Arena) -> DVec2 {
        DVec2::ZERO
    }
}

/// Accelerates straight away from the obstacle whose edge is closest,
/// measuring across the wrap seams.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evade;

impl Strategy for Evade {
    fn decide(&mut self, arena: &Arena) -> DVec2 {
        let ship = arena.ship();
        let mut nearest: Option<(f64, DVec2)> = None;

        for obstacle in arena.obstacles() {
            // Points from the obstacle to the ship
            let away = DVec2::new(
                shortest_delta(obstacle.pos.x, ship.pos.x, arena.width()),
                shortest_delta(obstacle.pos.y, ship.pos.y, arena.height()),
            );
            let gap = away.length() - obstacle.radius - ship.radius;
            match nearest {
                Some((best, _)) if best <= gap => {}
                _ => nearest = Some((gap, away)),
            }
        }

        nearest
            .map(|(_, away)| away.normalize_or_zero())
            .unwrap_or(DVec2::ZERO)
    }
}

/// Strategy selection for settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Idle,
    Evade,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Idle => "idle",
            StrategyKind::Evade => "evade",
        }
    }

    pub fn build(&self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Idle => Box::new(Idle),
            StrategyKind::Evade => Box::new(Evade),
        }
    }
}
