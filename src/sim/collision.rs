//! Collision detection and response for the ball
//!
//! Paddles are axis-aligned rectangles; the ball is a circle. A paddle hit
//! doesn't mirror the velocity. It re-aims the ball based on where along the
//! paddle it landed and speeds it up.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::Side;
use crate::consts::PADDLE_BOOST;

/// Maximum deflection either side of straight, at the very paddle edge
pub const MAX_DEFLECTION: f32 = PI / 8.0;

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Point inside (or on the border of) the rectangle nearest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Touching counts as overlapping.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Normalized position along the paddle's height where the ball struck it
///
/// 0.0 is the paddle's top edge, 1.0 its bottom edge; contacts beyond the
/// ends (the ball clipping a corner) are clamped.
pub fn hit_position(ball_y: f32, paddle: &Rect) -> f32 {
    ((ball_y - paddle.pos.y) / paddle.size.y).clamp(0.0, 1.0)
}

/// Outgoing direction angle for a ball leaving `side`'s paddle
///
/// A center hit (`hit == 0.5`) sends the ball straight across.
pub fn deflection_angle(side: Side, hit: f32) -> f32 {
    let offset = (hit - 0.5) * PI / 4.0;
    match side {
        Side::Left => offset,
        Side::Right => PI - offset,
    }
}

/// New velocity after striking `side`'s paddle at `hit`
pub fn paddle_rebound(velocity: Vec2, side: Side, hit: f32) -> Vec2 {
    let speed = velocity.length() * PADDLE_BOOST;
    Vec2::from_angle(deflection_angle(side, hit)) * speed
}
