//! Frame timing
//!
//! Measures `dt` between steps, decides when the next frame is due and keeps
//! a rolling FPS estimate over the last [`FPS_WINDOW`] frames.

use std::time::{Duration, Instant};

/// Frames averaged for the FPS readout
pub const FPS_WINDOW: usize = 60;

#[derive(Debug)]
pub struct FrameClock {
    /// Target frame period
    target: Duration,
    /// When the previous frame was stepped (None before the first frame)
    last: Option<Instant>,
    /// Ring of recent frame timestamps
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            last: None,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// When the next frame should be drawn
    pub fn next_frame_at(&self, now: Instant) -> Instant {
        self.last.map_or(now, |last| last + self.target)
    }

    /// Whether a frame is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame_at(now)
    }

    /// Mark a frame at `now` and return seconds since the previous one
    ///
    /// The very first frame reports one target period.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => self.target,
        };
        self.last = Some(now);

        // Oldest entry sits where the newest is about to go
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if let Some(oldest) = oldest {
            let elapsed = now.saturating_duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 / elapsed).round() as u32;
            }
        }

        dt.as_secs_f32()
    }

    /// Rolling average frames per second (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
