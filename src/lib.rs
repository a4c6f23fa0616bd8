//! Brick Breaker - a Breakout/Arkanoid style arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Draw list handed to whatever paints the frame
//! - `platform`: Input sources (keyboard/touch state, autopilot)
//! - `audio`: Fire-and-forget sound cues
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions (portrait, like a phone screen)
    pub const FIELD_WIDTH: f32 = 540.0;
    pub const FIELD_HEIGHT: f32 = 960.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 16.0;
    /// Paddle top edge as a fraction of field height
    pub const PADDLE_Y_FRACTION: f32 = 0.9;

    /// Gap between a stuck ball and the paddle top
    pub const BALL_STUCK_GAP: f32 = 2.0;

    /// Brick grid
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_BASE_ROWS: usize = 5;
    pub const BRICK_MAX_ROWS: usize = 15;
    pub const BRICK_PADDING: f32 = 4.0;
    /// 24px at the logical 960px height
    pub const BRICK_HEIGHT_FRACTION: f32 = 0.025;
    /// 150px at the logical 960px height
    pub const BRICK_TOP_FRACTION: f32 = 0.15625;
}
