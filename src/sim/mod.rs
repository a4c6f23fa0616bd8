//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per frame
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod level;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use level::{LevelGrid, generate_level, layout_bricks};
pub use state::{
    Ball, Brick, BrickEffect, BrickKind, GameEvent, GamePhase, GameState, Paddle, PowerUp,
    WidthClass,
};
pub use tick::{TickInput, step, tick};
