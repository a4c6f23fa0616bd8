//! Collision detection and velocity helpers
//!
//! Everything in the playfield is an axis-aligned box: the ball is a square,
//! the paddle and bricks are rectangles. Screen coordinates, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// True iff the two boxes intersect on both axes.
///
/// Touching edges do not count as overlap.
#[inline]
pub fn overlaps(ball: &Rect, rect: &Rect) -> bool {
    ball.right() > rect.x
        && ball.x < rect.right()
        && ball.bottom() > rect.y
        && ball.y < rect.bottom()
}

/// Rescale `vel` so its magnitude lies in `[min_speed, max_speed]`, keeping direction
pub fn clamp_speed(vel: Vec2, min_speed: f32, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed {
        vel * (max_speed / speed)
    } else if speed > 0.0 && speed < min_speed {
        vel * (min_speed / speed)
    } else {
        vel
    }
}

/// Angle between the trajectory and the vertical axis, in `[0, π/2]`
#[inline]
pub fn steepness(vel: Vec2) -> f32 {
    vel.x.abs().atan2(vel.y.abs())
}

/// Signed angle from straight up, positive to the right
#[inline]
pub fn angle_from_vertical(vel: Vec2) -> f32 {
    vel.x.atan2(-vel.y)
}
