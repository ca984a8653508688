//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! a step is a function of (state, input, dt) only.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_overlap, deflection_angle, hit_position, paddle_rebound};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
