//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives in [`GameState`].
//! The renderer only ever borrows it.

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;

/// Which player a paddle, score or serve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Physics and paddles advance every step
    #[default]
    Running,
    /// Only the pause toggle is processed
    Paused,
}

/// Something notable that happened during a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off a paddle at normalized hit position `hit`
    PaddleHit { side: Side, hit: f32, speed: f32 },
    /// Ball bounced off the top or bottom of the playfield
    WallBounce,
    /// A point was scored by `side`
    Scored { side: Side, left: u32, right: u32 },
    /// Pause flag flipped; `paused` is the new value
    PauseToggled { paused: bool },
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            side,
            rect: Rect::new(x, PADDLE_START_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// Lowest y the paddle's top edge may take
    #[inline]
    pub fn min_y() -> f32 {
        PLAY_START_HEIGHT
    }

    /// Highest y the paddle's top edge may take
    #[inline]
    pub fn max_y(&self) -> f32 {
        SCREEN_HEIGHT - self.rect.size.y
    }

    pub fn move_up(&mut self) {
        self.rect.pos.y = (self.rect.pos.y - PADDLE_STEP).max(Self::min_y());
    }

    pub fn move_down(&mut self) {
        self.rect.pos.y = (self.rect.pos.y + PADDLE_STEP).min(self.max_y());
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Self::center(),
            vel: Vec2::new(-SERVE_SPEED, 0.0),
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Middle of the screen, where every serve starts
    pub fn center() -> Vec2 {
        Vec2::new(0.5 * SCREEN_WIDTH, 0.5 * SCREEN_HEIGHT)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Reset to the center, moving horizontally toward `toward`
    pub fn serve(&mut self, toward: Side) {
        let vx = match toward {
            Side::Left => -SERVE_SPEED,
            Side::Right => SERVE_SPEED,
        };
        self.pos = Self::center();
        self.vel = Vec2::new(vx, 0.0);
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    /// Events from the most recent step
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Running,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            left_score: 0,
            right_score: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Credit a point to `side` and serve toward the player who lost it
    pub fn award_point(&mut self, side: Side) {
        match side {
            Side::Left => self.left_score = self.left_score.saturating_add(1),
            Side::Right => self.right_score = self.right_score.saturating_add(1),
        }
        self.ball.serve(side.opponent());
        self.events.push(GameEvent::Scored {
            side,
            left: self.left_score,
            right: self.right_score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.left.rect.pos, Vec2::new(54.0, 288.0));
        assert_eq!(state.right.rect.pos, Vec2::new(1026.0, 288.0));
        assert_eq!(state.ball.pos, Vec2::new(540.0, 360.0));
        assert_eq!(state.ball.vel, Vec2::new(-300.0, 0.0));
        assert_eq!((state.left_score, state.right_score), (0, 0));
    }

    #[test]
    fn test_paddle_clamps_at_bounds() {
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..100 {
            paddle.move_up();
        }
        assert_eq!(paddle.rect.pos.y, PLAY_START_HEIGHT);

        for _ in 0..100 {
            paddle.move_down();
        }
        assert_eq!(paddle.rect.pos.y, SCREEN_HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_award_point_serves_toward_loser() {
        let mut state = GameState::new();
        state.ball.pos = Vec2::new(-5.0, 100.0);
        state.ball.vel = Vec2::new(-500.0, 80.0);

        state.award_point(Side::Right);
        assert_eq!(state.right_score, 1);
        assert_eq!(state.left_score, 0);
        assert_eq!(state.ball.pos, Ball::center());
        assert_eq!(state.ball.vel, Vec2::new(-SERVE_SPEED, 0.0));
        assert!(matches!(
            state.events.last(),
            Some(GameEvent::Scored { side: Side::Right, left: 0, right: 1 })
        ));
    }
}
