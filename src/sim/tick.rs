//! Fixed timestep simulation tick

use glam::DVec2;

use super::collision::is_collision;
use super::state::Arena;

impl Arena {
    /// Advance the whole field by one timestep.
    ///
    /// `input` is the strategy's acceleration, scaled by the arena's `accel`.
    /// The ship moves on its current velocity before the input is applied, so
    /// acceleration shows up in position from the next tick on. Every obstacle
    /// moves regardless of hits. Returns true when the ship ends the tick
    /// touching any obstacle.
    pub fn tick(&mut self, input: DVec2, dt: f64) -> bool {
        self.score += 1;

        self.ship.tick(self.width, self.height, dt);
        self.ship.vel += self.accel * input * dt;

        for obstacle in &mut self.obstacles {
            obstacle.tick(self.width, self.height, dt);
        }

        let mut collision = false;
        for obstacle in &self.obstacles {
            if is_collision(obstacle, &self.ship) {
                collision = true;
            }
        }
        collision
    }
}
