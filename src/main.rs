//! Torus Dodge entry point
//!
//! Plays episodes back to back, drawing each frame to stdout in real time.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use torus_dodge::renderer::rasterize;
use torus_dodge::runner::run_episode;
use torus_dodge::sim::{Arena, PcgSource};
use torus_dodge::{RunStats, Settings};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Torus Dodge starting...");

    let settings = Settings::from_env().context("failed to load settings")?;
    settings.validate()?;

    // One generator for the whole process, shared by every episode
    let mut rng = match settings.seed {
        Some(seed) => PcgSource::new(seed),
        None => PcgSource::from_entropy(),
    };
    log::info!(
        "Seed: {}, strategy: {}",
        rng.seed()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string()),
        settings.strategy.as_str()
    );

    let frame_delay = Duration::from_secs_f64(settings.dt);
    let mut strategy = settings.strategy.build();
    let mut stats = RunStats::default();

    for episode in 0..settings.episodes {
        if settings.render {
            thread::sleep(Duration::from_millis(settings.episode_pause_ms));
        }
        println!("{episode}th episode");

        let mut arena = Arena::new(
            settings.obstacles,
            settings.width,
            settings.height,
            settings.accel,
            &mut rng,
        )
        .with_context(|| format!("failed to build arena for episode {episode}"))?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Arena: {}", serde_json::to_string(&arena)?);
        }

        let mut render_error = None;
        let outcome = run_episode(
            &mut arena,
            strategy.as_mut(),
            settings.dt,
            settings.max_ticks,
            |arena| {
                if !settings.render || render_error.is_some() {
                    return;
                }
                match rasterize(arena, settings.grid_width, settings.grid_height) {
                    Ok(grid) => {
                        println!("{grid}");
                        thread::sleep(frame_delay);
                    }
                    Err(e) => render_error = Some(e),
                }
            },
        );
        if let Some(e) = render_error {
            return Err(e).context("failed to render frame");
        }

        stats.record(episode, &outcome);
        log::info!("Episode {} score {}", episode, outcome.score);
        if !outcome.collided {
            log::info!("Episode {} hit the tick cap", episode);
        }
    }

    match stats.best {
        Some((best, episode)) => log::info!(
            "Finished {} episodes: best {} (episode {}), mean {:.1}, {} collisions",
            stats.episodes,
            best,
            episode,
            stats.mean_score(),
            stats.collisions
        ),
        None => log::info!("Finished without playing any episodes"),
    }

    Ok(())
}
