//! Presentation settings
//!
//! Gameplay rules are fixed in [`crate::consts`]; these only change how the
//! game is shown.

use crate::consts::TARGET_FPS;

/// Display preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Wait for vertical blank when presenting
    pub vsync: bool,
    /// Show the FPS counter in the top-left corner
    pub show_fps: bool,
    /// Frames per second the run loop paces itself to
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: true,
            show_fps: false,
            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// Time budget of a single frame at the target rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}
