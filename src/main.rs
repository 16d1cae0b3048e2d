//! Intercept entry point
//!
//! There is no native window; the binary runs the game against the headless
//! renderer with an auto-player tapping at the incoming ships, and logs how
//! each round went.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use intercept::consts::FRAME_DT;
use intercept::renderer::{Camera, HeadlessRenderer};
use intercept::sim::GamePhase;
use intercept::ui::LogHud;
use intercept::{Game, Settings};

#[derive(Parser, Debug)]
#[command(about = "Headless auto-play run of the intercept game", version)]
struct Args {
    /// Settings JSON (defaults are used when the file is missing)
    #[arg(long, default_value = "intercept.json")]
    settings: PathBuf,
    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,
    /// Rounds to play before exiting
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// Chance that an auto-player tap is aimed at the ship
    #[arg(long, default_value_t = 0.9)]
    accuracy: f64,
    /// Seconds between auto-player taps
    #[arg(long, default_value_t = 0.75)]
    tap_interval: f32,
    /// Stop after this much simulated time
    #[arg(long, default_value_t = 600.0)]
    max_seconds: f64,
    /// Write the default settings to this path and exit
    #[arg(long)]
    write_default_settings: Option<PathBuf>,
}

/// Taps where the ship is, most of the time
struct AutoPlayer {
    rng: Pcg32,
    accuracy: f64,
    tap_interval: f32,
    cooldown: f32,
}

impl AutoPlayer {
    fn new(seed: u64, accuracy: f64, tap_interval: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
            accuracy,
            tap_interval,
            cooldown: tap_interval,
        }
    }

    /// Screen point to tap this frame, if any
    fn next_tap(&mut self, game: &Game<HeadlessRenderer, LogHud>, dt: f32) -> Option<Vec2> {
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return None;
        }
        self.cooldown = self.tap_interval;

        let renderer = game.renderer();
        let viewport = renderer.camera().viewport;
        let aimed = game
            .live_target()
            .and_then(|(_, node)| renderer.screen_position(node));

        match aimed {
            Some(point) if self.rng.random_bool(self.accuracy) => Some(point),
            _ => Some(Vec2::new(
                self.rng.random_range(0.0..viewport.x),
                self.rng.random_range(0.0..viewport.y),
            )),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(
        (0.0..=1.0).contains(&args.accuracy),
        "--accuracy must be in [0, 1], got {}",
        args.accuracy
    );
    ensure!(
        args.tap_interval.is_finite() && args.tap_interval > 0.0,
        "--tap-interval must be positive, got {}",
        args.tap_interval
    );

    if let Some(path) = &args.write_default_settings {
        Settings::default()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        return Ok(());
    }

    let settings = Settings::load(&args.settings)
        .with_context(|| format!("loading {}", args.settings.display()))?;
    let seed = args.seed.unwrap_or_else(|| settings.resolve_seed());
    log::info!("Intercept (headless) starting, seed {}", seed);

    let camera = Camera::new(
        Vec3::ZERO,
        settings.fov_degrees,
        Vec2::new(settings.viewport_width, settings.viewport_height),
    );
    let renderer = HeadlessRenderer::new(camera, settings.tuning.target_radius);
    let mut game = Game::new(renderer, LogHud::default(), &settings, seed, 0.0)
        .context("failed to start game")?;

    let mut player = AutoPlayer::new(seed, args.accuracy, args.tap_interval);
    let mut scores = Vec::new();
    let mut frame: u64 = 0;

    loop {
        frame += 1;
        let now = frame as f64 * FRAME_DT as f64;
        if now > args.max_seconds {
            log::warn!("Stopped after {:.0}s of simulated time", args.max_seconds);
            break;
        }
        game.frame(now);

        match game.state().phase {
            GamePhase::Playing => {
                if let Some(point) = player.next_tap(&game, FRAME_DT) {
                    game.tap(point);
                }
            }
            GamePhase::GameOver => {
                scores.push(game.state().score);
                log::info!(
                    "Round {} over at {:.2}s: {}",
                    scores.len(),
                    now,
                    game.hud().text.replace('\n', " ")
                );
                if scores.len() as u32 >= args.rounds {
                    break;
                }
                game.restart();
            }
        }
    }

    let best = scores.iter().copied().max().unwrap_or(0);
    println!("Rounds: {}  Scores: {:?}  Best: {}", scores.len(), scores, best);
    Ok(())
}
