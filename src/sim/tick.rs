//! Fixed-step simulation tick
//!
//! Core game loop that advances the simulation by one logical frame. Physics
//! always runs before collision resolution, which always runs before the
//! life-loss and level-clear checks. Side effects are reported as
//! `GameEvent`s instead of being performed inline.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::state::{
    Ball, BrickEffect, BrickKind, GameEvent, GamePhase, GameState, Paddle, PowerUp, WidthClass,
};
use crate::tuning::Tuning;

/// Input snapshot for a single frame (levels, not edges)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Launch / start / restart
    pub action: bool,
}

/// Advance the game state by one frame, returning what happened in order
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Only a fresh press counts; holding the button does nothing
    let pressed = input.action && !state.action_held;
    state.action_held = input.action;
    state.frame += 1;

    match state.phase {
        GamePhase::Menu => {
            if pressed {
                state.phase = GamePhase::Playing;
                log::info!("Game started at level {}", state.level);
                events.push(GameEvent::GameStarted);
            }
        }
        GamePhase::Playing => tick_playing(state, input, pressed, &mut events),
        GamePhase::GameOver => {
            if pressed {
                state.restart();
                log::info!("Restarted after game over");
                events.push(GameEvent::GameStarted);
            }
        }
    }

    state.normalize_order();
    events
}

/// Pure form of [`tick`]: the input state is left untouched
pub fn step(state: &GameState, input: &TickInput) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let events = tick(&mut next, input);
    (next, events)
}

fn tick_playing(
    state: &mut GameState,
    input: &TickInput,
    pressed: bool,
    events: &mut Vec<GameEvent>,
) {
    state.paddle.update(input);

    let mut points = 0u64;
    let mut power_ups = 0usize;
    // Deferred so the ball list isn't mutated mid-iteration
    let mut spawned: Vec<Ball> = Vec::new();

    {
        let GameState {
            rng,
            tuning,
            bounds,
            paddle,
            balls,
            bricks,
            next_id,
            ..
        } = state;

        for ball in balls.iter_mut() {
            if ball.stuck {
                if pressed {
                    ball.launch(rng, tuning);
                    events.push(GameEvent::Launch);
                } else {
                    ball.track_paddle(paddle);
                }
                continue;
            }

            // One wall cue per ball per frame, even in a corner
            if ball.update(paddle, *bounds).any() {
                events.push(GameEvent::WallBounce);
            }

            // Only while falling, so a ball inside the paddle can't re-trigger
            if ball.vel.y > 0.0 && overlaps(&ball.rect(), &paddle.rect()) {
                deflect_off_paddle(ball, paddle, tuning);
                events.push(GameEvent::PaddleHit);
            }

            // At most one brick per ball per frame: first match in grid order
            let ball_rect = ball.rect();
            let Some(brick) = bricks
                .iter_mut()
                .find(|b| b.is_active() && overlaps(&ball_rect, &b.rect))
            else {
                continue;
            };

            ball.vel.y = -ball.vel.y;
            ball.scale_speed(tuning.bounce_growth);
            // Leave the brick on the side we now head toward
            ball.pos.y = if ball.vel.y < 0.0 {
                brick.rect.y - ball.size
            } else {
                brick.rect.bottom()
            };

            if !brick.hit() {
                points += tuning.scores.damage;
                events.push(GameEvent::BrickDamaged);
                continue;
            }

            let kind = brick.kind;
            points += tuning.scores.destroy_points(kind);
            events.push(GameEvent::BrickDestroyed { kind });

            match kind.effect() {
                BrickEffect::None => {}
                BrickEffect::PowerUp => power_ups += 1,
                BrickEffect::SlowBall => ball.scale_speed(tuning.slow_factor),
                BrickEffect::FastBall => ball.scale_speed(tuning.fast_factor),
                BrickEffect::SplitBall => {
                    let id = *next_id;
                    *next_id += 1;
                    spawned.push(ball.split(id, rng, tuning));
                    events.push(GameEvent::BallSplit);
                }
            }
        }
    }

    state.balls.extend(spawned);
    for _ in 0..power_ups {
        apply_power_up(state, events);
    }
    state.add_score(points, events);

    // Falling out the bottom removes the ball
    let bounds = state.bounds;
    state.balls.retain(|b| !b.has_fallen(bounds));

    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });

        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over: score {} at level {}", state.score, state.level);
            events.push(GameEvent::GameOver { score: state.score });
            return;
        }

        log::debug!("Ball lost, {} lives left", state.lives);
        state.paddle.set_width_class(WidthClass::Normal);
        state.spawn_ball_stuck();
    }

    if state.active_brick_count() == 0 {
        let next_level = state.level + 1;
        state.load_level(next_level);
        events.push(GameEvent::LevelComplete { next_level });
    }
}

/// Bounce up off the paddle. Where the ball lands relative to the paddle center
/// maps linearly onto `[-max_deflection, +max_deflection]` from vertical.
fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, tuning: &Tuning) {
    let half_width = paddle.width / 2.0;
    let offset = ((ball.center().x - paddle.center_x()) / half_width).clamp(-1.0, 1.0);
    let angle = offset * tuning.max_deflection();

    let speed = ball.speed() * tuning.bounce_growth;
    ball.set_velocity(Vec2::new(speed * angle.sin(), -speed * angle.cos()));
    // Lift clear of the paddle so the next frame starts outside it
    ball.pos.y = paddle.y - ball.size;
}

fn apply_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let power_up = draw_power_up(&mut state.rng, &state.tuning);
    match power_up {
        PowerUp::LongPaddle => state.paddle.set_width_class(WidthClass::Long),
        PowerUp::ShortPaddle => state.paddle.set_width_class(WidthClass::Short),
        PowerUp::ReviveBrick => revive_random_brick(state),
    }
    log::debug!("Power-up: {:?}", power_up);
    events.push(GameEvent::PowerUp(power_up));
}

fn draw_power_up<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> PowerUp {
    let weights = &tuning.power_ups;
    let roll = rng.random::<f32>() * weights.total();
    if roll < weights.long_paddle {
        PowerUp::LongPaddle
    } else if roll < weights.long_paddle + weights.short_paddle {
        PowerUp::ShortPaddle
    } else {
        PowerUp::ReviveBrick
    }
}

/// Bring back one destroyed brick. Item bricks stay gone so a revival can't
/// chain into another power-up.
fn revive_random_brick(state: &mut GameState) {
    let candidates: Vec<usize> = state
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.is_active() && b.kind != BrickKind::Item)
        .map(|(i, _)| i)
        .collect();
    if candidates.is_empty() {
        return;
    }
    let pick = candidates[state.rng.random_range(0..candidates.len())];
    state.bricks[pick].revive();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::{Rect, angle_from_vertical};
    use crate::sim::state::Brick;

    const PRESS: TickInput = TickInput {
        left: false,
        right: false,
        action: true,
    };
    const IDLE: TickInput = TickInput {
        left: false,
        right: false,
        action: false,
    };

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Playing;
        state
    }

    fn free_ball(state: &mut GameState, pos: Vec2, vel: Vec2) {
        let ball = &mut state.balls[0];
        ball.stuck = false;
        ball.pos = pos;
        ball.vel = vel;
    }

    /// Drop the ball just above the bottom edge, falling
    fn lose_ball(state: &mut GameState) {
        let bottom = Vec2::new(50.0, FIELD_HEIGHT - 1.0);
        free_ball(state, bottom, Vec2::new(1.0, 5.0));
    }

    /// Replace the level with `bricks` plus an out-of-the-way brick so the
    /// level doesn't complete when they break
    fn set_bricks(state: &mut GameState, bricks: Vec<Brick>) {
        state.bricks = bricks;
        state
            .bricks
            .push(Brick::new(Rect::new(450.0, 150.0, 60.0, 24.0), BrickKind::Normal));
    }

    #[test]
    fn test_menu_to_playing_on_press() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Menu);

        // Tick without press - stays in menu, paddle doesn't move
        let x = state.paddle.x;
        tick(
            &mut state,
            &TickInput {
                left: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.paddle.x, x);

        let events = tick(&mut state, &PRESS);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(events, vec![GameEvent::GameStarted]);
        // The start press doesn't also launch
        assert!(state.balls[0].stuck);
    }

    #[test]
    fn test_launch_needs_new_press() {
        let mut state = GameState::new(12345);
        tick(&mut state, &PRESS);

        // Still holding from the menu press
        tick(&mut state, &PRESS);
        assert!(state.balls[0].stuck);

        tick(&mut state, &IDLE);
        let events = tick(&mut state, &PRESS);
        assert!(events.contains(&GameEvent::Launch));
        assert!(!state.balls[0].stuck);
        assert!(state.balls[0].vel.y < 0.0);
    }

    #[test]
    fn test_paddle_edge_deflects_sixty_degrees() {
        let mut state = playing_state(1);
        state.paddle.base_width = 100.0;
        state.paddle.set_width_class(WidthClass::Normal);
        state.paddle.x = (FIELD_WIDTH - 100.0) / 2.0;
        let paddle = state.paddle.clone();

        let size = state.balls[0].size;
        // After moving 4px down its center sits on the paddle's left edge,
        // overlapping the paddle top by 2px
        let pos = Vec2::new(paddle.x - size / 2.0, paddle.y - size - 2.0);
        free_ball(&mut state, pos, Vec2::new(0.0, 4.0));

        let events = tick(&mut state, &IDLE);
        assert!(events.contains(&GameEvent::PaddleHit));
        let ball = &state.balls[0];
        let angle = angle_from_vertical(ball.vel).to_degrees();
        assert!((angle + 60.0).abs() < 0.01, "angle was {angle}");
        assert!(ball.vel.x < 0.0 && ball.vel.y < 0.0);
        assert!((ball.speed() - 4.0 * 1.01).abs() < 1e-3);
        assert!(ball.pos.y + ball.size <= paddle.y);
    }

    #[test]
    fn test_paddle_center_sends_ball_straight_up() {
        let mut state = playing_state(1);
        let paddle = state.paddle.clone();
        let size = state.balls[0].size;
        let pos = Vec2::new(paddle.center_x() - size / 2.0, paddle.y - size - 2.0);
        free_ball(&mut state, pos, Vec2::new(0.0, 4.0));

        tick(&mut state, &IDLE);
        let ball = &state.balls[0];
        assert!(ball.vel.x.abs() < 1e-4);
        assert!(ball.vel.y < 0.0);
    }

    #[test]
    fn test_last_ball_lost_is_game_over() {
        let mut state = playing_state(2);
        state.lives = 1;
        lose_ball(&mut state);

        let events = tick(&mut state, &IDLE);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);
        assert!(state.balls.is_empty());
        assert!(events.contains(&GameEvent::LifeLost { lives_left: 0 }));
        assert!(events.contains(&GameEvent::GameOver { score: 0 }));

        // Nothing respawns while game over
        tick(&mut state, &IDLE);
        assert!(state.balls.is_empty());
    }

    #[test]
    fn test_life_lost_respawns_stuck_ball() {
        let mut state = playing_state(2);
        state.paddle.set_width_class(WidthClass::Long);
        lose_ball(&mut state);

        let events = tick(&mut state, &IDLE);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 4);
        assert_eq!(state.balls.len(), 1);
        assert!(state.balls[0].stuck);
        assert_eq!(state.paddle.width_class, WidthClass::Normal);
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 4 }]);
    }

    #[test]
    fn test_one_ball_lost_of_two_keeps_lives() {
        let mut state = playing_state(2);
        lose_ball(&mut state);
        let mut other = state.balls[0].clone();
        other.id = 99;
        other.pos = Vec2::new(300.0, 500.0);
        other.vel = Vec2::new(2.0, -5.0);
        state.balls.push(other);

        tick(&mut state, &IDLE);
        assert_eq!(state.lives, 5);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].id, 99);
    }

    #[test]
    fn test_level_complete_resets_to_one_stuck_ball() {
        let mut state = playing_state(3);
        free_ball(&mut state, Vec2::new(100.0, 600.0), Vec2::new(2.0, -5.0));
        for i in 0..2 {
            let mut extra = state.balls[0].clone();
            extra.id = 50 + i;
            state.balls.push(extra);
        }
        for brick in &mut state.bricks {
            brick.hp = 0;
        }

        let events = tick(&mut state, &IDLE);
        assert!(events.contains(&GameEvent::LevelComplete { next_level: 2 }));
        assert_eq!(state.level, 2);
        assert_eq!(state.balls.len(), 1);
        assert!(state.balls[0].stuck);
        assert!(state.active_brick_count() > 0);
    }

    #[test]
    fn test_no_level_complete_while_bricks_remain() {
        let mut state = playing_state(3);
        for brick in state.bricks.iter_mut().skip(1) {
            brick.hp = 0;
        }
        let events = tick(&mut state, &IDLE);
        assert_eq!(state.level, 1);
        assert!(!events.contains(&GameEvent::LevelComplete { next_level: 2 }));
    }

    #[test]
    fn test_split_brick_spawns_diverging_ball() {
        let mut state = playing_state(4);
        set_bricks(
            &mut state,
            vec![Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), BrickKind::Split)],
        );
        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));

        let split = GameEvent::BrickDestroyed {
            kind: BrickKind::Split,
        };
        let events = tick(&mut state, &IDLE);
        assert!(events.contains(&split));
        assert!(events.contains(&GameEvent::BallSplit));
        assert_eq!(state.balls.len(), 2);
        let (a, b) = (&state.balls[0], &state.balls[1]);
        assert_ne!(a.vel, b.vel);
        assert!(a.vel.angle_to(b.vel).abs() >= state.tuning.split_angle_min - 1e-4);
        assert_eq!(state.score, 600);
    }

    #[test]
    fn test_hard_brick_two_hits() {
        let mut state = playing_state(5);
        set_bricks(
            &mut state,
            vec![Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), BrickKind::Hard)],
        );

        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));
        let events = tick(&mut state, &IDLE);
        assert!(events.contains(&GameEvent::BrickDamaged));
        assert!(state.bricks[0].is_active());
        assert!(state.bricks[0].is_damaged());
        assert_eq!(state.score, 50);

        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));
        let destroyed = GameEvent::BrickDestroyed {
            kind: BrickKind::Hard,
        };
        let events = tick(&mut state, &IDLE);
        assert!(events.contains(&destroyed));
        assert!(!state.bricks[0].is_active());
        assert_eq!(state.score, 250);
    }

    #[test]
    fn test_grazing_hard_brick_takes_one_hit_per_contact() {
        let mut state = playing_state(5);
        set_bricks(
            &mut state,
            vec![Brick::new(Rect::new(100.0, 300.0, 64.0, 24.0), BrickKind::Hard)],
        );
        // Clips the brick's left side while rising slowly
        free_ball(&mut state, Vec2::new(86.0, 305.0), Vec2::new(6.0, -1.5));

        let mut damaged = 0;
        for _ in 0..5 {
            let events = tick(&mut state, &IDLE);
            damaged += events
                .iter()
                .filter(|e| **e == GameEvent::BrickDamaged)
                .count();
            let destroyed = |e: &GameEvent| matches!(e, GameEvent::BrickDestroyed { .. });
            assert!(!events.iter().any(destroyed));
        }
        assert_eq!(damaged, 1);
        assert_eq!(state.bricks[0].hp, 1);

        let ball = &state.balls[0];
        assert!(ball.vel.y > 0.0);
        assert!(!overlaps(&ball.rect(), &state.bricks[0].rect));
    }

    #[test]
    fn test_brick_bounce_reflects_vertical_velocity() {
        let mut state = playing_state(5);
        set_bricks(
            &mut state,
            vec![Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), BrickKind::Normal)],
        );
        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));
        tick(&mut state, &IDLE);
        let ball = &state.balls[0];
        assert!(ball.vel.y > 0.0);
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_one_brick_per_ball_per_frame() {
        let mut state = playing_state(6);
        let rect = Rect::new(95.0, 290.0, 64.0, 24.0);
        set_bricks(
            &mut state,
            vec![
                Brick::new(rect, BrickKind::Normal),
                Brick::new(rect, BrickKind::Normal),
            ],
        );
        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));

        tick(&mut state, &IDLE);
        assert!(!state.bricks[0].is_active());
        assert!(state.bricks[1].is_active());
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_slow_and_fast_bricks_change_speed() {
        for (kind, slower) in [(BrickKind::Slow, true), (BrickKind::Fast, false)] {
            let mut state = playing_state(7);
            set_bricks(
                &mut state,
                vec![Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), kind)],
            );
            free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(3.0, -6.0));
            let before = state.balls[0].speed();

            tick(&mut state, &IDLE);
            let after = state.balls[0].speed();
            assert_eq!(after < before, slower, "{kind:?}: {before} -> {after}");
            assert!(after <= state.balls[0].speed_cap + 1e-4);
            assert!(after >= state.balls[0].min_speed - 1e-4);
        }
    }

    #[test]
    fn test_item_brick_awards_bonus_and_power_up() {
        let mut state = playing_state(8);
        set_bricks(
            &mut state,
            vec![Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), BrickKind::Item)],
        );
        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));

        let events = tick(&mut state, &IDLE);
        assert_eq!(state.score, 500);
        let power_up = events.iter().find_map(|e| match e {
            GameEvent::PowerUp(p) => Some(*p),
            _ => None,
        });
        match power_up {
            Some(PowerUp::LongPaddle) => assert_eq!(state.paddle.width_class, WidthClass::Long),
            Some(PowerUp::ShortPaddle) => assert_eq!(state.paddle.width_class, WidthClass::Short),
            Some(PowerUp::ReviveBrick) => {}
            None => panic!("item brick released no power-up"),
        }
    }

    #[test]
    fn test_revive_skips_item_bricks() {
        let mut state = playing_state(9);
        set_bricks(
            &mut state,
            vec![
                Brick::new(Rect::new(0.0, 150.0, 60.0, 24.0), BrickKind::Item),
                Brick::new(Rect::new(70.0, 150.0, 60.0, 24.0), BrickKind::Hard),
            ],
        );
        state.bricks[0].hp = 0;
        state.bricks[1].hp = 0;

        revive_random_brick(&mut state);
        assert!(!state.bricks[0].is_active());
        assert_eq!(state.bricks[1].hp, 2);
    }

    #[test]
    fn test_power_up_weights() {
        let mut tuning = Tuning::default();
        tuning.power_ups.long_paddle = 1.0;
        tuning.power_ups.short_paddle = 0.0;
        tuning.power_ups.revive_brick = 0.0;
        let mut state = GameState::new(1);
        for _ in 0..50 {
            assert_eq!(draw_power_up(&mut state.rng, &tuning), PowerUp::LongPaddle);
        }
    }

    #[test]
    fn test_bonus_life_scenario() {
        let mut state = playing_state(10);
        set_bricks(
            &mut state,
            vec![
                Brick::new(Rect::new(95.0, 290.0, 64.0, 24.0), BrickKind::Normal),
                Brick::new(Rect::new(95.0, 390.0, 64.0, 24.0), BrickKind::Normal),
            ],
        );
        state.score = 9_999;
        let lives = state.lives;

        free_ball(&mut state, Vec2::new(100.0, 300.0), Vec2::new(2.0, -5.0));
        let events = tick(&mut state, &IDLE);
        assert_eq!(state.score, 10_099);
        assert_eq!(state.lives, lives + 1);
        assert!(events.contains(&GameEvent::BonusLife { lives: lives + 1 }));

        free_ball(&mut state, Vec2::new(100.0, 400.0), Vec2::new(2.0, -5.0));
        let events = tick(&mut state, &IDLE);
        assert_eq!(state.score, 10_199);
        assert_eq!(state.lives, lives + 1);
        let bonus = |e: &GameEvent| matches!(e, GameEvent::BonusLife { .. });
        assert!(!events.iter().any(bonus));
    }

    #[test]
    fn test_corner_bounce_emits_one_wall_event() {
        let mut state = playing_state(11);
        free_ball(&mut state, Vec2::new(1.0, 1.0), Vec2::new(-3.0, -3.0));
        let events = tick(&mut state, &IDLE);
        let walls = events
            .iter()
            .filter(|e| **e == GameEvent::WallBounce)
            .count();
        assert_eq!(walls, 1);
        let ball = &state.balls[0];
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
        assert_eq!(ball.pos, Vec2::ZERO);
    }

    #[test]
    fn test_game_over_press_restarts() {
        let mut state = playing_state(12);
        state.lives = 1;
        state.score = 4_200;
        state.load_level(4);
        lose_ball(&mut state);
        tick(&mut state, &IDLE);
        assert_eq!(state.phase, GamePhase::GameOver);

        let events = tick(&mut state, &PRESS);
        assert_eq!(events, vec![GameEvent::GameStarted]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 5);
        assert_eq!(state.level, 1);
        assert_eq!(state.balls.len(), 1);
        assert!(state.balls[0].stuck);
    }

    #[test]
    fn test_step_leaves_input_state_untouched() {
        let state = GameState::new(13);
        let (next, events) = step(&state, &PRESS);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.frame, 0);
        assert_eq!(next.phase, GamePhase::Playing);
        assert_eq!(next.frame, 1);
        assert_eq!(events, vec![GameEvent::GameStarted]);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for frame in 0..600u32 {
            let input = TickInput {
                left: frame % 90 < 30,
                right: frame % 90 > 60,
                action: frame % 20 == 0,
            };
            let events1 = tick(&mut state1, &input);
            let events2 = tick(&mut state2, &input);
            assert_eq!(events1, events2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.balls.len(), state2.balls.len());
        for (a, b) in state1.balls.iter().zip(&state2.balls) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
        }
        assert!((state1.paddle.x - state2.paddle.x).abs() < 0.0001);
    }
}
