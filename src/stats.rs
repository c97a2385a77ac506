//! Aggregate results over a run of episodes

use serde::{Deserialize, Serialize};

use crate::runner::EpisodeOutcome;

/// Totals for every episode recorded so far
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub episodes: u32,
    /// Episodes that ended on a hit rather than the tick cap
    pub collisions: u32,
    pub total_ticks: u64,
    /// Highest score and the episode (0-based) that first reached it
    pub best: Option<(u64, u32)>,
}

impl RunStats {
    pub fn record(&mut self, episode: u32, outcome: &EpisodeOutcome) {
        self.episodes += 1;
        self.total_ticks += outcome.score;
        if outcome.collided {
            self.collisions += 1;
        }
        if self.best.is_none_or(|(score, _)| outcome.score > score) {
            self.best = Some((outcome.score, episode));
        }
    }

    pub fn mean_score(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_ticks as f64 / f64::from(self.episodes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(score: u64, collided: bool) -> EpisodeOutcome {
        EpisodeOutcome { score, collided }
    }

    #[test]
    fn test_empty_run() {
        let stats = RunStats::default();
        assert_eq!(stats.mean_score(), 0.0);
        assert_eq!(stats.best, None);
    }

    #[test]
    fn test_record_episodes() {
        let mut stats = RunStats::default();
        stats.record(0, &outcome(30, true));
        stats.record(1, &outcome(50, true));
        stats.record(2, &outcome(50, false));
        stats.record(3, &outcome(10, true));

        assert_eq!(stats.episodes, 4);
        assert_eq!(stats.collisions, 3);
        assert_eq!(stats.total_ticks, 140);
        assert_eq!(stats.mean_score(), 35.0);
        // Ties keep the earlier episode
        assert_eq!(stats.best, Some((50, 1)));
    }
}
