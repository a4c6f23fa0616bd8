//! Brick Breaker entry point
//!
//! Headless native runner: the autopilot plays a seeded session and the HUD
//! is logged as it changes.
//!
//! Usage: `brick-breaker [seed] [max_frames]`
//! Environment: `BRICK_TUNING` and `BRICK_SETTINGS` point at JSON config files.

use brick_breaker::audio::LogSink;
use brick_breaker::platform::Autopilot;
use brick_breaker::renderer::{HudLogRenderer, NullRenderer, RenderFrame, Renderer};
use brick_breaker::sim::GameState;
use brick_breaker::{Game, Settings, Tuning};

const DEFAULT_SEED: u64 = 0xB41C;
const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;

enum HudOutput {
    Log(HudLogRenderer),
    Silent(NullRenderer),
}

impl Renderer for HudOutput {
    fn draw(&mut self, frame: &RenderFrame) {
        match self {
            HudOutput::Log(r) => r.draw(frame),
            HudOutput::Silent(r) => r.draw(frame),
        }
    }
}

fn load_config<T: Default>(
    var: &str,
    load: impl FnOnce(&str) -> Result<T, brick_breaker::ConfigError>,
) -> T {
    match std::env::var(var) {
        Ok(path) => load(&path).unwrap_or_else(|e| {
            log::warn!("{}: {} - using defaults", var, e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let tuning = load_config("BRICK_TUNING", |p| Tuning::load(p));
    let settings = load_config("BRICK_SETTINGS", |p| Settings::load(p));

    log::info!("Brick Breaker (headless) starting with seed {}", seed);

    let mut renderer = if settings.show_hud {
        HudOutput::Log(HudLogRenderer::default())
    } else {
        HudOutput::Silent(NullRenderer)
    };
    let mut game = Game::new(GameState::with_tuning(seed, tuning), LogSink, settings);
    let frames = game.run(&mut Autopilot::new(), &mut renderer, max_frames);

    let state = game.state();
    println!(
        "seed {}: {} frames, level {}, score {}, lives {}, phase {:?}",
        seed, frames, state.level, state.score, state.lives, state.phase
    );
}
