//! Arena state and core simulation types

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::is_collision;
use super::rng::UniformSource;
use crate::consts::*;
use crate::error::Error;
use crate::wrap_once;

/// A moving circle: the ship or one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// Advance by one timestep and wrap back onto the field.
    ///
    /// Each axis is corrected at most once, so `|vel * dt|` must stay below the
    /// field extent on that axis for the result to land in `[0, extent)`.
    pub fn tick(&mut self, width: f64, height: f64, dt: f64) {
        self.pos += self.vel * dt;
        self.pos.x = wrap_once(self.pos.x, width);
        self.pos.y = wrap_once(self.pos.y, height);
    }
}

/// The wrap-around field with its ship and obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    /// Ticks survived this episode
    pub(super) score: u64,
    pub(super) width: f64,
    pub(super) height: f64,
    /// Scale applied to strategy acceleration input
    pub(super) accel: f64,
    pub(super) ship: Body,
    /// Obstacles in spawn order; order fixes render tags
    pub(super) obstacles: Vec<Body>,
}

impl Arena {
    /// Build an arena with `n` obstacles, none of which touch the ship.
    ///
    /// An `accel` of zero selects the default scale, `min(width, height)`.
    pub fn new<R: UniformSource + ?Sized>(
        n: usize,
        width: f64,
        height: f64,
        accel: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let accel = resolve_field(width, height, accel)?;
        let mindim = width.min(height);
        let ship = Body::new(
            DVec2::new(width / 2.0, height / 2.0),
            DVec2::ZERO,
            mindim / SHIP_RADIUS_DIVISOR,
        );

        let vmax = mindim / OBSTACLE_SPEED_DIVISOR;
        let max_radius = mindim / OBSTACLE_RADIUS_DIVISOR;
        let mut obstacles = Vec::with_capacity(n);
        while obstacles.len() < n {
            let mut attempts = 0;
            let obstacle = loop {
                if attempts == MAX_SPAWN_ATTEMPTS {
                    log::warn!(
                        "Gave up placing obstacle {} after {} attempts",
                        obstacles.len(),
                        attempts
                    );
                    return Err(Error::SpawnExhausted {
                        placed: obstacles.len(),
                        requested: n,
                        attempts,
                    });
                }
                attempts += 1;

                let pos = DVec2::new(rng.uniform(0.0, width), rng.uniform(0.0, height));
                let vel = DVec2::new(rng.uniform(-vmax, vmax), rng.uniform(-vmax, vmax));
                let radius = rng.uniform(OBSTACLE_MIN_RADIUS, max_radius);
                let candidate = Body::new(pos, vel, radius);
                if is_collision(&candidate, &ship) {
                    log::trace!("Rejected obstacle spawn at {:?} r={}", pos, radius);
                    continue;
                }
                break candidate;
            };
            obstacles.push(obstacle);
        }

        log::debug!(
            "Arena {}x{}: {} obstacles, ship radius {}, accel {}",
            width,
            height,
            obstacles.len(),
            ship.radius,
            accel
        );

        Ok(Self {
            score: 0,
            width,
            height,
            accel,
            ship,
            obstacles,
        })
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn accel(&self) -> f64 {
        self.accel
    }

    pub fn ship(&self) -> &Body {
        &self.ship
    }

    pub fn obstacles(&self) -> &[Body] {
        &self.obstacles
    }

    /// Whether any obstacle currently overlaps the ship
    pub fn ship_hit(&self) -> bool {
        self.obstacles.iter().any(|o| is_collision(o, &self.ship))
    }

    /// Assemble an arena from explicit parts (scenario setup and tests)
    pub fn from_parts(
        width: f64,
        height: f64,
        accel: f64,
        ship: Body,
        obstacles: Vec<Body>,
    ) -> Result<Self, Error> {
        let accel = resolve_field(width, height, accel)?;
        Ok(Self {
            score: 0,
            width,
            height,
            accel,
            ship,
            obstacles,
        })
    }
}

/// Check field extents and resolve the acceleration scale (0 = smaller extent)
fn resolve_field(width: f64, height: f64, accel: f64) -> Result<f64, Error> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(if accel == 0.0 { width.min(height) } else { accel })
}
