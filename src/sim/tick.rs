//! Per-frame simulation step
//!
//! Advances the game by one variable timestep: paddles, ball motion,
//! collisions and scoring.

use super::collision::{circle_rect_overlap, hit_position, paddle_rebound};
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Input signals for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle up (held)
    pub left_up: bool,
    /// Left paddle down (held)
    pub left_down: bool,
    /// Right paddle up (held)
    pub right_up: bool,
    /// Right paddle down (held)
    pub right_down: bool,
    /// Pause toggle (pressed this frame)
    pub pause: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    // Pause toggle is honored even while paused
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        };
        state.events.push(GameEvent::PauseToggled {
            paused: state.is_paused(),
        });
    }

    if state.is_paused() {
        return;
    }

    move_paddles(state, input);

    state.ball.pos += state.ball.vel * dt;

    collide_paddles(state);
    collide_walls(state);
    check_scoring(state);
}

fn move_paddles(state: &mut GameState, input: &TickInput) {
    if input.left_up {
        state.left.move_up();
    }
    if input.left_down {
        state.left.move_down();
    }
    if input.right_up {
        state.right.move_up();
    }
    if input.right_down {
        state.right.move_down();
    }
}

/// Only the paddle the ball is heading toward is tested
fn collide_paddles(state: &mut GameState) {
    let paddle = state.paddle(if state.ball.vel.x < 0.0 {
        Side::Left
    } else {
        Side::Right
    });

    if !circle_rect_overlap(state.ball.pos, state.ball.radius, &paddle.rect) {
        return;
    }

    let side = paddle.side;
    let hit = hit_position(state.ball.pos.y, &paddle.rect);
    state.ball.vel = paddle_rebound(state.ball.vel, side, hit);
    state.events.push(GameEvent::PaddleHit {
        side,
        hit,
        speed: state.ball.speed(),
    });
}

fn collide_walls(state: &mut GameState) {
    let ball = &mut state.ball;

    if ball.vel.y > 0.0 {
        let floor = SCREEN_HEIGHT - ball.radius;
        if ball.pos.y >= floor {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = floor;
            state.events.push(GameEvent::WallBounce);
        }
    } else {
        let ceiling = PLAY_START_HEIGHT + ball.radius;
        if ball.pos.y <= ceiling {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = ceiling;
            state.events.push(GameEvent::WallBounce);
        }
    }
}

fn check_scoring(state: &mut GameState) {
    if state.ball.pos.x < 0.0 {
        state.award_point(Side::Right);
    } else if state.ball.pos.x > SCREEN_WIDTH {
        state.award_point(Side::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ball;
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / TARGET_FPS as f32;
    const EPS: f32 = 1e-3;

    fn pause() -> TickInput {
        TickInput {
            pause: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(-120.0, 60.0);
        tick(&mut state, &TickInput::default(), 0.5);
        assert_eq!(state.ball.pos, Vec2::new(540.0 - 60.0, 360.0 + 30.0));
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_zero_dt_leaves_ball_in_place() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ball.pos, Ball::center());
    }

    #[test]
    fn test_paddle_input() {
        let mut state = GameState::new();
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.left.rect.pos.y, PADDLE_START_Y - PADDLE_STEP);
        assert_eq!(state.right.rect.pos.y, PADDLE_START_Y + PADDLE_STEP);

        // Both directions at once cancel out away from the bounds
        let input = TickInput {
            left_up: true,
            left_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.left.rect.pos.y, PADDLE_START_Y - PADDLE_STEP);
    }

    #[test]
    fn test_pause_freezes_everything_but_the_toggle() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(250.0, -40.0);

        tick(&mut state, &pause(), DT);
        assert!(state.is_paused());
        assert_eq!(
            state.events,
            vec![GameEvent::PauseToggled { paused: true }]
        );

        let ball = state.ball.clone();
        let left = state.left.clone();
        let held = TickInput {
            left_up: true,
            right_down: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &held, DT);
        }
        assert_eq!(state.ball, ball);
        assert_eq!(state.left, left);
        assert_eq!((state.left_score, state.right_score), (0, 0));
        assert!(state.events.is_empty());

        // Toggle back and the ball moves again
        tick(&mut state, &pause(), DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert_ne!(state.ball.pos, ball.pos);
    }

    #[test]
    fn test_left_paddle_hit() {
        let mut state = GameState::new();
        let paddle = state.left.rect;
        // Ball overlapping the left paddle's right face, a quarter way down
        state.ball.pos = Vec2::new(
            paddle.max().x + state.ball.radius * 0.5,
            paddle.pos.y + paddle.size.y * 0.25,
        );
        state.ball.vel = Vec2::new(-300.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.0);

        assert!(state.ball.vel.x > 0.0, "ball should head right");
        assert!(state.ball.vel.y < 0.0, "upper-half hit deflects upward");
        assert!((state.ball.speed() - 315.0).abs() < EPS);
        assert!(matches!(
            state.events.as_slice(),
            [GameEvent::PaddleHit { side: Side::Left, .. }]
        ));
    }

    #[test]
    fn test_paddle_ignored_when_moving_away() {
        let mut state = GameState::new();
        let paddle = state.left.rect;
        state.ball.pos = Vec2::new(paddle.max().x, paddle.pos.y + 10.0);
        state.ball.vel = Vec2::new(300.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.ball.vel, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_right_paddle_center_hit_is_horizontal() {
        let mut state = GameState::new();
        let paddle = state.right.rect;
        state.ball.pos = Vec2::new(paddle.pos.x, paddle.pos.y + paddle.size.y * 0.5);
        state.ball.vel = Vec2::new(400.0, 0.0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert!((state.ball.vel.x + 420.0).abs() < EPS);
        assert!(state.ball.vel.y.abs() < EPS);
    }

    #[test]
    fn test_bottom_wall_reflects_and_clamps() {
        let mut state = GameState::new();
        let floor = SCREEN_HEIGHT - state.ball.radius;
        state.ball.pos = Vec2::new(500.0, floor + 3.0);
        state.ball.vel = Vec2::new(0.0, 200.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.vel.y, -200.0);
        assert_eq!(state.ball.pos.y, floor);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_top_wall_sits_below_header() {
        let mut state = GameState::new();
        let ceiling = PLAY_START_HEIGHT + state.ball.radius;
        state.ball.pos = Vec2::new(500.0, ceiling + 1.0);
        state.ball.vel = Vec2::new(0.0, -180.0);

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.vel.y, 180.0);
        assert_eq!(state.ball.pos.y, ceiling);
    }

    #[test]
    fn test_ball_past_left_edge_scores_for_right() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(-1.0, 400.0);
        state.ball.vel = Vec2::new(-350.0, 20.0);
        state.right_score = 4;

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.right_score, 5);
        assert_eq!(state.left_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(0.5 * SCREEN_WIDTH, 0.5 * SCREEN_HEIGHT));
        assert_eq!(state.ball.vel, Vec2::new(-300.0, 0.0));
    }

    #[test]
    fn test_ball_past_right_edge_scores_for_left() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(SCREEN_WIDTH + 1.0, 400.0);
        state.ball.vel = Vec2::new(350.0, -20.0);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.left_score, 1);
        assert_eq!(state.right_score, 0);
        assert_eq!(state.ball.pos, Vec2::new(0.5 * SCREEN_WIDTH, 0.5 * SCREEN_HEIGHT));
        assert_eq!(state.ball.vel, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_unattended_rally_ends_in_a_point() {
        // Idle paddles keep returning the serve straight until the ball is
        // fast enough to skip past one in a single frame.
        let mut state = GameState::new();
        let mut last = (0, 0);
        for _ in 0..(TARGET_FPS * 60) {
            tick(&mut state, &TickInput::default(), DT);
            let now = (state.left_score, state.right_score);
            assert!(now.0 >= last.0 && now.1 >= last.1);
            last = now;
            assert!(state.ball.pos.y >= PLAY_START_HEIGHT);
            assert!(state.ball.pos.y <= SCREEN_HEIGHT);
        }
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(left_up, left_down, right_up, right_down)| TickInput {
                left_up,
                left_down,
                right_up,
                right_down,
                pause: false,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_playfield(inputs in prop::collection::vec(input_strategy(), 1..200)) {
            let mut state = GameState::new();
            for input in &inputs {
                tick(&mut state, input, DT);
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.rect.pos.y >= PLAY_START_HEIGHT);
                    prop_assert!(paddle.rect.pos.y <= SCREEN_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }

        #[test]
        fn prop_paddle_hit_boosts_speed(
            hit in 0.0f32..=1.0,
            vx in 100.0f32..2000.0,
            vy in -500.0f32..500.0,
        ) {
            let mut state = GameState::new();
            let paddle = state.left.rect;
            state.ball.pos = Vec2::new(paddle.max().x, paddle.pos.y + hit * paddle.size.y);
            state.ball.vel = Vec2::new(-vx, vy);
            let before = state.ball.speed();

            tick(&mut state, &TickInput::default(), 0.0);

            let after = state.ball.speed();
            prop_assert!((after - before * PADDLE_BOOST).abs() <= before * 1e-4);
            prop_assert!(state.ball.vel.x > 0.0);
        }
    }
}
