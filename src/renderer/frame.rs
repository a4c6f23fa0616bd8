//! Per-frame draw list built from game state

use crate::sim::{Brick, BrickKind, GamePhase, GameState, Rect};

/// What an entity is, so the renderer can pick its look
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteTag {
    Paddle,
    Ball,
    /// Rainbow brick, hue in degrees
    Normal { hue: f32 },
    Hard,
    /// Hard brick that has taken its first hit
    HardDamaged,
    Item,
    Slow,
    Fast,
    Split,
}

impl SpriteTag {
    pub fn for_brick(brick: &Brick) -> Self {
        match brick.kind {
            BrickKind::Normal => SpriteTag::Normal {
                hue: (brick.rect.y * 0.5) % 360.0,
            },
            BrickKind::Hard if brick.is_damaged() => SpriteTag::HardDamaged,
            BrickKind::Hard => SpriteTag::Hard,
            BrickKind::Item => SpriteTag::Item,
            BrickKind::Slow => SpriteTag::Slow,
            BrickKind::Fast => SpriteTag::Fast,
            BrickKind::Split => SpriteTag::Split,
        }
    }

    /// Fill color as linear RGBA
    pub fn color(&self) -> [f32; 4] {
        match *self {
            SpriteTag::Paddle => [0.0, 0.667, 1.0, 1.0],
            SpriteTag::Ball => [1.0, 1.0, 1.0, 1.0],
            SpriteTag::Normal { hue } => hsl_to_rgba(hue, 0.7, 0.5),
            SpriteTag::Hard => [0.667, 0.667, 0.667, 1.0],
            SpriteTag::HardDamaged => [0.4, 0.4, 0.4, 1.0],
            SpriteTag::Item => [1.0, 0.843, 0.0, 1.0],
            SpriteTag::Slow => [1.0, 0.0, 0.0, 1.0],
            SpriteTag::Fast => [1.0, 1.0, 0.0, 1.0],
            SpriteTag::Split => [0.0, 0.0, 1.0, 1.0],
        }
    }
}

fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> [f32; 4] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m, 1.0]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub tag: SpriteTag,
}

/// Read-only session readout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Title screen, "press A / space to start"
    Title,
    GameOver { final_score: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width: f32,
    pub height: f32,
    /// Paint order: paddle, balls, then active bricks
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
    pub overlay: Option<Overlay>,
}

impl RenderFrame {
    pub fn from_state(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(1 + state.balls.len() + state.bricks.len());
        sprites.push(Sprite {
            rect: state.paddle.rect(),
            tag: SpriteTag::Paddle,
        });
        sprites.extend(state.balls.iter().map(|ball| Sprite {
            rect: ball.rect(),
            tag: SpriteTag::Ball,
        }));
        sprites.extend(
            state
                .bricks
                .iter()
                .filter(|b| b.is_active())
                .map(|brick| Sprite {
                    rect: brick.rect,
                    tag: SpriteTag::for_brick(brick),
                }),
        );

        let overlay = match state.phase {
            GamePhase::Menu => Some(Overlay::Title),
            GamePhase::Playing => None,
            GamePhase::GameOver => Some(Overlay::GameOver {
                final_score: state.score,
            }),
        };

        Self {
            width: state.bounds.x,
            height: state.bounds.y,
            sprites,
            hud: Hud {
                score: state.score,
                lives: state.lives,
                level: state.level,
            },
            overlay,
        }
    }

    pub fn count(&self, pred: impl Fn(&SpriteTag) -> bool) -> usize {
        self.sprites.iter().filter(|s| pred(&s.tag)).count()
    }
}
