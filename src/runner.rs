//! Episode loop: drive one arena until the ship is hit

use serde::{Deserialize, Serialize};

use crate::sim::Arena;
use crate::strategy::Strategy;

/// How an episode ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeOutcome {
    /// Ticks survived
    pub score: u64,
    /// False when the tick cap stopped the episode first
    pub collided: bool,
}

/// Run `arena` to completion.
///
/// Each iteration hands the current state to `on_frame`, asks the strategy for
/// input and ticks. The loop ends on collision or after `max_ticks` ticks;
/// `on_frame` then sees the final state once more.
pub fn run_episode<S, F>(
    arena: &mut Arena,
    strategy: &mut S,
    dt: f64,
    max_ticks: Option<u64>,
    mut on_frame: F,
) -> EpisodeOutcome
where
    S: Strategy + ?Sized,
    F: FnMut(&Arena),
{
    let mut collided = false;
    while max_ticks.is_none_or(|cap| arena.score() < cap) {
        on_frame(arena);
        let input = strategy.decide(arena);
        if arena.tick(input, dt) {
            collided = true;
            break;
        }
    }
    on_frame(arena);

    let outcome = EpisodeOutcome {
        score: arena.score(),
        collided,
    };
    log::debug!(
        "Episode finished: score={} collided={}",
        outcome.score,
        outcome.collided
    );
    outcome
}
