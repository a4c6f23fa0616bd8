//! Game state and core simulation types
//!
//! All state the per-frame step reads or writes lives here. Coordinates are
//! screen pixels with the origin at the top-left; velocities are pixels/frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, clamp_speed, steepness};
use super::level::{generate_level, layout_bricks};
use super::tick::TickInput;
use crate::consts::*;
use crate::tuning::Tuning;

/// Top-level state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first press
    Menu,
    /// Active gameplay
    Playing,
    /// Out of lives; a press restarts
    GameOver,
}

/// Paddle width classes set by power-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidthClass {
    #[default]
    Normal,
    Long,
    Short,
}

impl WidthClass {
    /// Width multiplier applied to the paddle's base width
    pub fn factor(self) -> f32 {
        match self {
            WidthClass::Normal => 1.0,
            WidthClass::Long => 1.5,
            WidthClass::Short => 0.75,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Width at `WidthClass::Normal`
    pub base_width: f32,
    /// Travel per frame while a direction is held
    pub max_speed: f32,
    pub width_class: WidthClass,
    /// Field width the paddle is clamped to
    pub bounds_width: f32,
}

impl Paddle {
    /// A centered paddle for a field of the given size
    pub fn new(bounds: Vec2, tuning: &Tuning) -> Self {
        let base_width = bounds.x * tuning.paddle_width_fraction;
        Self {
            x: (bounds.x - base_width) / 2.0,
            y: bounds.y * PADDLE_Y_FRACTION,
            width: base_width,
            height: PADDLE_HEIGHT,
            base_width,
            max_speed: bounds.x * tuning.paddle_speed_fraction,
            width_class: WidthClass::Normal,
            bounds_width: bounds.x,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Move from the held directions. Holding both cancels out.
    pub fn update(&mut self, input: &TickInput) {
        let mut direction = 0.0;
        if input.left {
            direction -= 1.0;
        }
        if input.right {
            direction += 1.0;
        }
        self.x += direction * self.max_speed;
        self.clamp();
    }

    /// Switch width class immediately, keeping the left edge where it can
    pub fn set_width_class(&mut self, class: WidthClass) {
        self.width_class = class;
        self.width = self.base_width * class.factor();
        self.clamp();
    }

    /// Rescale for a new field size, preserving width class and relative position
    pub fn resize(&mut self, bounds: Vec2, tuning: &Tuning) {
        let scale = if self.bounds_width > 0.0 {
            bounds.x / self.bounds_width
        } else {
            1.0
        };
        self.bounds_width = bounds.x;
        self.base_width = bounds.x * tuning.paddle_width_fraction;
        self.width = self.base_width * self.width_class.factor();
        self.max_speed = bounds.x * tuning.paddle_speed_fraction;
        self.y = bounds.y * PADDLE_Y_FRACTION;
        self.x *= scale;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, (self.bounds_width - self.width).max(0.0));
    }
}

/// Walls touched during one ball update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// A ball entity (square, `pos` is its top-left corner)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Riding on the paddle, waiting for launch
    pub stuck: bool,
    /// Launch speed
    pub base_speed: f32,
    pub min_speed: f32,
    pub speed_cap: f32,
}

impl Ball {
    /// A ball stuck to the paddle
    pub fn new(id: u32, paddle: &Paddle, bounds: Vec2, tuning: &Tuning) -> Self {
        let base_speed = bounds.y * tuning.ball_speed_fraction;
        let mut ball = Self {
            id,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: tuning.ball_size,
            stuck: true,
            base_speed,
            min_speed: base_speed * tuning.min_speed_factor,
            speed_cap: base_speed * tuning.speed_cap_factor,
        };
        ball.track_paddle(paddle);
        ball
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Back onto the paddle with no velocity
    pub fn reset(&mut self, paddle: &Paddle) {
        self.stuck = true;
        self.vel = Vec2::ZERO;
        self.track_paddle(paddle);
    }

    /// Sit centered just above the paddle
    pub fn track_paddle(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(
            paddle.center_x() - self.size / 2.0,
            paddle.y - self.size - BALL_STUCK_GAP,
        );
    }

    /// Leave the paddle, heading upward at a random angle off vertical
    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        if !self.stuck {
            return;
        }
        let magnitude = rng
            .random_range(tuning.launch_angle_min_deg..=tuning.launch_angle_max_deg)
            .to_radians();
        let angle = if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        self.stuck = false;
        self.set_velocity(Vec2::new(
            self.base_speed * angle.sin(),
            -self.base_speed * angle.cos(),
        ));
    }

    /// Integrate one frame and bounce off the side and top walls.
    ///
    /// The bottom edge is open; the controller removes balls that fall through.
    pub fn update(&mut self, paddle: &Paddle, bounds: Vec2) -> WallContact {
        let mut contact = WallContact::default();
        if self.stuck {
            self.track_paddle(paddle);
            return contact;
        }

        self.pos += self.vel;

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
            contact.left = true;
        }
        if self.pos.x + self.size >= bounds.x {
            self.pos.x = bounds.x - self.size;
            self.vel.x = -self.vel.x.abs();
            contact.right = true;
        }
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
            contact.top = true;
        }
        contact
    }

    /// A free sibling at the same spot whose heading is rotated away from ours
    pub fn split<R: Rng + ?Sized>(&self, id: u32, rng: &mut R, tuning: &Tuning) -> Ball {
        let magnitude = rng.random_range(tuning.split_angle_min..=tuning.split_angle_max);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

        let mut vel = Vec2::from_angle(sign * magnitude).rotate(self.vel);
        if steepness(vel) > tuning.max_ball_angle() {
            // Rotating the other way keeps the sibling from skimming horizontally
            vel = Vec2::from_angle(-sign * magnitude).rotate(self.vel);
        }

        let mut ball = self.clone();
        ball.id = id;
        ball.stuck = false;
        ball.set_velocity(vel);
        ball
    }

    /// Replace velocity, keeping speed inside `[min_speed, speed_cap]`
    pub fn set_velocity(&mut self, vel: Vec2) {
        self.vel = clamp_speed(vel, self.min_speed, self.speed_cap);
    }

    /// Multiply speed by `factor`, then re-clamp
    pub fn scale_speed(&mut self, factor: f32) {
        self.set_velocity(self.vel * factor);
    }

    /// Past the bottom of the field
    pub fn has_fallen(&self, bounds: Vec2) -> bool {
        self.pos.y > bounds.y
    }
}

/// Special effect a brick releases when destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickEffect {
    None,
    /// Flat bonus plus a random power-up draw
    PowerUp,
    SlowBall,
    FastBall,
    SplitBall,
}

/// Brick types. Discriminants are the level grid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    #[default]
    Normal = 1,
    /// Silver, two hits
    Hard = 2,
    /// Gold, releases a power-up
    Item = 3,
    /// Red
    Slow = 4,
    /// Yellow
    Fast = 5,
    /// Blue, multiball
    Split = 6,
}

impl BrickKind {
    pub const ALL: [BrickKind; 6] = [
        BrickKind::Normal,
        BrickKind::Hard,
        BrickKind::Item,
        BrickKind::Slow,
        BrickKind::Fast,
        BrickKind::Split,
    ];

    /// Grid code, never 0 (0 is an empty cell)
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Kind for a grid code; `None` for an empty cell or an unknown code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    pub fn hit_points(self) -> u8 {
        match self {
            BrickKind::Hard => 2,
            _ => 1,
        }
    }

    pub fn effect(self) -> BrickEffect {
        match self {
            BrickKind::Normal | BrickKind::Hard => BrickEffect::None,
            BrickKind::Item => BrickEffect::PowerUp,
            BrickKind::Slow => BrickEffect::SlowBall,
            BrickKind::Fast => BrickEffect::FastBall,
            BrickKind::Split => BrickEffect::SplitBall,
        }
    }
}

/// A brick entity. Active exactly while it has hit points left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub kind: BrickKind,
    pub hp: u8,
}

impl Brick {
    pub fn new(rect: Rect, kind: BrickKind) -> Self {
        Self {
            rect,
            kind,
            hp: kind.hit_points(),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.hp > 0
    }

    /// Hit but not yet destroyed (Hard bricks after the first hit)
    pub fn is_damaged(&self) -> bool {
        self.is_active() && self.hp < self.kind.hit_points()
    }

    /// Take one hit. Returns true if this hit destroyed the brick.
    pub fn hit(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.hp -= 1;
        self.hp == 0
    }

    /// Bring a destroyed brick back at full strength
    pub fn revive(&mut self) {
        self.hp = self.kind.hit_points();
    }
}

/// Power-ups released by Item bricks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUp {
    LongPaddle,
    ShortPaddle,
    ReviveBrick,
}

/// Things that happened during one frame, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Menu or game-over press started a run
    GameStarted,
    Launch,
    WallBounce,
    PaddleHit,
    /// Hit that didn't destroy the brick
    BrickDamaged,
    BrickDestroyed { kind: BrickKind },
    PowerUp(PowerUp),
    BallSplit,
    LifeLost { lives_left: u32 },
    LevelComplete { next_level: u32 },
    BonusLife { lives: u32 },
    GameOver { score: u64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    /// Field size in pixels
    pub bounds: Vec2,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current level (1-based)
    pub level: u32,
    /// Score at which the next extra life is granted
    pub next_bonus_at: u64,
    pub paddle: Paddle,
    /// Active balls (sorted by id)
    pub balls: Vec<Ball>,
    /// Bricks of the current level, destroyed ones included
    pub bricks: Vec<Brick>,
    /// Action level seen last frame, for press-edge detection
    pub action_held: bool,
    /// Frames stepped since creation
    pub frame: u64,
    pub(crate) next_id: u32,
}

impl GameState {
    /// New session on the logical playfield with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_bounds(seed, tuning, Vec2::new(FIELD_WIDTH, FIELD_HEIGHT))
    }

    /// New session in the menu with level 1 loaded behind it.
    ///
    /// `tuning` must pass [`Tuning::validate`]; values loaded through
    /// `Tuning::from_json` or `Tuning::load` always do.
    pub fn with_bounds(seed: u64, tuning: Tuning, bounds: Vec2) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "invalid tuning: {:?}",
            tuning.validate()
        );
        let paddle = Paddle::new(bounds, &tuning);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.starting_lives,
            next_bonus_at: tuning.bonus_life_interval,
            tuning,
            bounds,
            phase: GamePhase::Menu,
            score: 0,
            level: 1,
            paddle,
            balls: Vec::new(),
            bricks: Vec::new(),
            action_held: false,
            frame: 0,
            next_id: 1,
        };
        state.load_level(1);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a ball stuck to the paddle
    pub fn spawn_ball_stuck(&mut self) {
        let id = self.next_entity_id();
        let ball = Ball::new(id, &self.paddle, self.bounds, &self.tuning);
        self.balls.push(ball);
    }

    /// Replace the ball set with one fresh stuck ball
    pub fn reset_balls(&mut self) {
        self.balls.clear();
        self.spawn_ball_stuck();
    }

    /// Generate and lay out `level`, then put one ball on a normal-width paddle
    pub fn load_level(&mut self, level: u32) {
        let grid = generate_level(level, &mut self.rng);
        self.level = level;
        self.bricks = layout_bricks(&grid, self.bounds);
        self.paddle.set_width_class(WidthClass::Normal);
        self.reset_balls();
        log::info!(
            "Level {}: {} rows, {} bricks",
            level,
            grid.rows(),
            self.bricks.len()
        );
    }

    /// Fresh session straight into play
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.next_bonus_at = self.tuning.bonus_life_interval;
        self.load_level(1);
        self.phase = GamePhase::Playing;
    }

    /// Adapt to a new field size. Bricks are regenerated for the current level.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Vec2::new(width.max(1.0), height.max(1.0));
        self.paddle.resize(bounds, &self.tuning);
        self.bounds = bounds;
        self.load_level(self.level);
    }

    pub fn active_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    /// Add points and grant one life per newly crossed bonus threshold
    pub fn add_score(&mut self, points: u64, events: &mut Vec<GameEvent>) {
        self.score += points;
        let interval = self.tuning.bonus_life_interval;
        while interval > 0 && self.score >= self.next_bonus_at {
            self.next_bonus_at += interval;
            self.lives += 1;
            log::info!("Bonus life at {} points ({} lives)", self.score, self.lives);
            events.push(GameEvent::BonusLife { lives: self.lives });
        }
    }

    /// Ensure deterministic iteration order
    pub fn normalize_order(&mut self) {
        self.balls.sort_by_key(|b| b.id);
    }
}
