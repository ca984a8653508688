//! Pong - classic two-player paddle game
//!
//! Core modules:
//! - `sim`: Per-frame simulation step (input, motion, collisions, scoring)
//! - `renderer`: wgpu drawing of paddles, ball, header and pause overlay
//! - `platform`: winit window, keyboard state and frame pacing
//! - `settings`: Presentation preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::PlatformError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const SCREEN_WIDTH: f32 = 1080.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    /// Height of the header strip; the playfield starts below it
    pub const PLAY_START_HEIGHT: f32 = 50.0;

    /// Paddle geometry (fractions of the screen)
    pub const PADDLE_WIDTH: f32 = 0.01 * SCREEN_WIDTH;
    pub const PADDLE_HEIGHT: f32 = 0.2 * SCREEN_HEIGHT;
    pub const LEFT_PADDLE_X: f32 = 0.05 * SCREEN_WIDTH;
    pub const RIGHT_PADDLE_X: f32 = 0.95 * SCREEN_WIDTH;
    pub const PADDLE_START_Y: f32 = 0.40 * SCREEN_HEIGHT;
    /// Pixels a paddle moves per frame while its key is held
    pub const PADDLE_STEP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.015 * SCREEN_HEIGHT;
    /// Horizontal serve speed after a point (pixels/s)
    pub const SERVE_SPEED: f32 = 300.0;
    /// Speed multiplier applied on every paddle hit (no cap)
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Frame pacing hint for the run loop
    pub const TARGET_FPS: u32 = 60;
}
