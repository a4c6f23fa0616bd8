//! Idle/demo mode - AI plays the game
//!
//! Tracks the most dangerous ball (the lowest one that is falling), aims a
//! little off-center so rallies don't settle into a vertical loop, and taps
//! action whenever a ball is waiting on the paddle.

use super::InputProvider;
use crate::sim::{Ball, GamePhase, GameState, TickInput};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Keep playing after game over instead of ending the run
    pub restart_on_game_over: bool,
    /// Paddle is "on target" within this many pixels
    pub dead_zone: f32,
    tapped_last_frame: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            restart_on_game_over: false,
            dead_zone: 4.0,
            tapped_last_frame: false,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press on alternate frames so every tap is a fresh press
    fn tap(&mut self) -> bool {
        self.tapped_last_frame = !self.tapped_last_frame;
        self.tapped_last_frame
    }

    fn target_x(state: &GameState) -> Option<f32> {
        let paddle_y = state.paddle.y;
        let ball = state
            .balls
            .iter()
            .filter(|b| !b.stuck && b.vel.y > 0.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;

        // Add oscillating offset based on time to create variety
        let t = state.frame as f32 * 0.01;
        let wobble = t.sin() * 0.3 + (t * 0.7).sin() * 0.15;
        let offset = wobble * state.paddle.width / 2.0;
        Some(predict_landing_x(ball, paddle_y, state.bounds.x) + offset)
    }
}

/// Where the ball's center will cross `paddle_y`, folding wall bounces
fn predict_landing_x(ball: &Ball, paddle_y: f32, width: f32) -> f32 {
    let center = ball.center();
    if ball.vel.y <= 0.0 || width <= 0.0 {
        return center.x;
    }
    let frames = ((paddle_y - ball.pos.y - ball.size) / ball.vel.y).max(0.0);
    let raw = center.x + ball.vel.x * frames;
    let period = 2.0 * width;
    let folded = raw.rem_euclid(period);
    if folded > width {
        period - folded
    } else {
        folded
    }
}

impl InputProvider for Autopilot {
    fn poll(&mut self, state: &GameState) -> Option<TickInput> {
        let mut input = TickInput::default();
        match state.phase {
            GamePhase::Menu => input.action = self.tap(),
            GamePhase::GameOver => {
                if !self.restart_on_game_over {
                    return None;
                }
                input.action = self.tap();
            }
            GamePhase::Playing => {
                if state.balls.iter().any(|b| b.stuck) {
                    input.action = self.tap();
                }
                if let Some(target) = Self::target_x(state) {
                    let center = state.paddle.center_x();
                    input.left = center > target + self.dead_zone;
                    input.right = center < target - self.dead_zone;
                }
            }
        }
        Some(input)
    }
}
