//! Data-driven game balance
//!
//! Every number that changes how the game feels lives here so it can be
//! tweaked from a JSON file without touching the simulation. Speeds are in
//! pixels per frame: the simulation advances one fixed step per rendered frame.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, read_config};
use crate::sim::state::BrickKind;

/// Points awarded by brick hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    /// Destroying a brick awards `per_code * code` (Normal=1 .. Split=6)
    pub per_code: u64,
    /// Flat award for destroying an Item brick
    pub item_bonus: u64,
    /// Award for a hit that damages but doesn't destroy
    pub damage: u64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            per_code: 100,
            item_bonus: 500,
            damage: 50,
        }
    }
}

impl ScoreTable {
    /// Points for destroying a brick of the given kind
    pub fn destroy_points(&self, kind: BrickKind) -> u64 {
        match kind {
            BrickKind::Item => self.item_bonus,
            _ => self.per_code * u64::from(kind.code()),
        }
    }
}

/// Relative weights of the power-ups an Item brick can release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpWeights {
    pub long_paddle: f32,
    pub short_paddle: f32,
    pub revive_brick: f32,
}

impl Default for PowerUpWeights {
    fn default() -> Self {
        Self {
            long_paddle: 0.4,
            short_paddle: 0.3,
            revive_brick: 0.3,
        }
    }
}

impl PowerUpWeights {
    fn parts(&self) -> [f32; 3] {
        [self.long_paddle, self.short_paddle, self.revive_brick]
    }

    pub fn total(&self) -> f32 {
        self.parts().iter().sum()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be positive"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub starting_lives: u32,
    /// An extra life is granted every time the score crosses a multiple of this
    pub bonus_life_interval: u64,

    /// Paddle base width as a fraction of field width
    pub paddle_width_fraction: f32,
    /// Paddle travel per frame as a fraction of field width
    pub paddle_speed_fraction: f32,

    pub ball_size: f32,
    /// Launch speed as a fraction of field height
    pub ball_speed_fraction: f32,
    /// Speed cap as a multiple of launch speed
    pub speed_cap_factor: f32,
    /// Speed floor as a multiple of launch speed (keeps Slow bricks from stalling the ball)
    pub min_speed_factor: f32,
    /// Per-bounce speed multiplier
    pub bounce_growth: f32,
    pub slow_factor: f32,
    pub fast_factor: f32,

    /// Launch angle magnitude range, degrees from vertical
    pub launch_angle_min_deg: f32,
    pub launch_angle_max_deg: f32,
    /// Deflection at the very edge of the paddle, degrees from vertical
    pub max_deflection_deg: f32,
    /// Steepest trajectory a split may produce, degrees from vertical
    pub max_ball_angle_deg: f32,
    /// Split perturbation magnitude range, radians
    pub split_angle_min: f32,
    pub split_angle_max: f32,

    pub scores: ScoreTable,
    pub power_ups: PowerUpWeights,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 5,
            bonus_life_interval: 10_000,
            paddle_width_fraction: 0.2,
            paddle_speed_fraction: 0.02,
            ball_size: 10.0,
            ball_speed_fraction: 0.008,
            speed_cap_factor: 2.0,
            min_speed_factor: 0.5,
            bounce_growth: 1.01,
            slow_factor: 0.7,
            fast_factor: 1.3,
            launch_angle_min_deg: 5.0,
            launch_angle_max_deg: 45.0,
            max_deflection_deg: 60.0,
            max_ball_angle_deg: 75.0,
            split_angle_min: 0.1,
            split_angle_max: 0.25,
            scores: ScoreTable::default(),
            power_ups: PowerUpWeights::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let tuning = Self::from_json(&read_config(path)?)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would let the simulation reach a degenerate state.
    ///
    /// Every check is phrased so that NaN fails it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        if self.bonus_life_interval == 0 {
            return Err(ConfigError::invalid("bonus_life_interval", "must be positive"));
        }
        if !(self.paddle_width_fraction > 0.0 && self.paddle_width_fraction * 1.5 < 1.0) {
            return Err(ConfigError::invalid(
                "paddle_width_fraction",
                "long paddle must fit inside the field",
            ));
        }
        positive("paddle_speed_fraction", self.paddle_speed_fraction)?;
        positive("ball_size", self.ball_size)?;
        positive("ball_speed_fraction", self.ball_speed_fraction)?;
        if !(self.speed_cap_factor.is_finite() && self.speed_cap_factor >= 1.0) {
            return Err(ConfigError::invalid(
                "speed_cap_factor",
                "cap must not be below launch speed",
            ));
        }
        if !(self.min_speed_factor > 0.0 && self.min_speed_factor <= 1.0) {
            return Err(ConfigError::invalid("min_speed_factor", "must be in (0, 1]"));
        }
        if !(self.bounce_growth.is_finite() && self.bounce_growth >= 1.0) {
            return Err(ConfigError::invalid("bounce_growth", "must be at least 1"));
        }
        if !(self.slow_factor > 0.0 && self.slow_factor < 1.0) {
            return Err(ConfigError::invalid("slow_factor", "must be in (0, 1)"));
        }
        if !(self.fast_factor.is_finite() && self.fast_factor > 1.0) {
            return Err(ConfigError::invalid("fast_factor", "must be above 1"));
        }
        let (launch_min, launch_max) = (self.launch_angle_min_deg, self.launch_angle_max_deg);
        if !(0.0 < launch_min && launch_min <= launch_max && launch_max < 90.0) {
            return Err(ConfigError::invalid(
                "launch_angle_min_deg",
                "launch range must be inside (0, 90) and never exactly vertical",
            ));
        }
        let (deflection, steepest) = (self.max_deflection_deg, self.max_ball_angle_deg);
        if !(0.0 < deflection && deflection <= steepest && steepest < 90.0) {
            return Err(ConfigError::invalid(
                "max_deflection_deg",
                "deflection must not exceed max_ball_angle_deg, which must stay below 90",
            ));
        }
        let (split_min, split_max) = (self.split_angle_min, self.split_angle_max);
        if !(0.0 < split_min && split_min <= split_max && split_max.to_degrees() < steepest) {
            return Err(ConfigError::invalid(
                "split_angle_min",
                "split range must be positive, ordered and below max_ball_angle_deg",
            ));
        }
        let weights = self.power_ups.parts();
        if !(weights.iter().all(|w| *w >= 0.0) && self.power_ups.total() > 0.0) {
            return Err(ConfigError::invalid(
                "power_ups",
                "weights must be non-negative and sum above zero",
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn max_deflection(&self) -> f32 {
        self.max_deflection_deg.to_radians()
    }

    #[inline]
    pub fn max_ball_angle(&self) -> f32 {
        self.max_ball_angle_deg.to_radians()
    }
}
