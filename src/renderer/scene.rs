//! Frame composition
//!
//! Turns a [`GameState`] into one triangle list in screen pixels: playfield
//! first, then the header, then the pause overlay on top.

use glam::Vec2;

use super::shapes;
use super::text::{draw_text, measure_text};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GameState, Rect, Side};

/// Header text top edge and size
pub const HEADER_Y: f32 = 17.0;
pub const HEADER_FONT_SIZE: f32 = 30.0;
pub const TITLE: &str = "Pong";

/// Pause overlay
pub const PAUSE_FONT_SIZE: f32 = 40.0;
pub const PAUSE_TEXT: &str = "Paused";
const PAUSE_PADDING: f32 = 10.0;
const PAUSE_BOX_HEIGHT: f32 = 60.0;

const FPS_FONT_SIZE: f32 = 10.0;

/// What to draw besides the game itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    /// Frames per second to show in the corner, if any
    pub fps: Option<u32>,
}

/// Build the full draw list for one frame
pub fn build_frame(state: &GameState, overlay: Overlay) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(4096);

    draw_playfield(&mut out, state);
    draw_header(&mut out, state);
    if state.is_paused() {
        draw_pause(&mut out);
    }
    if let Some(fps) = overlay.fps {
        draw_text(
            &mut out,
            &format!("FPS: {fps}"),
            Vec2::splat(4.0),
            FPS_FONT_SIZE,
            colors::FPS,
        );
    }

    out
}

fn draw_playfield(out: &mut Vec<Vertex>, state: &GameState) {
    shapes::rect(out, &state.left.rect, colors::WHITE);
    shapes::rect(out, &state.right.rect, colors::WHITE);
    shapes::circle(
        out,
        state.ball.pos,
        state.ball.radius,
        colors::WHITE,
        shapes::CIRCLE_SEGMENTS,
    );
}

/// Title centered, scores at 10% and 90% of the width, rule underneath
fn draw_header(out: &mut Vec<Vertex>, state: &GameState) {
    let title_width = measure_text(TITLE, HEADER_FONT_SIZE);
    let title_x = ((SCREEN_WIDTH - title_width) / 2.0).floor();
    draw_text(out, TITLE, Vec2::new(title_x, HEADER_Y), HEADER_FONT_SIZE, colors::WHITE);

    for (side, x) in [(Side::Left, 0.1), (Side::Right, 0.9)] {
        let score = state.score(side).to_string();
        let origin = Vec2::new((x * SCREEN_WIDTH).floor(), HEADER_Y);
        draw_text(out, &score, origin, HEADER_FONT_SIZE, colors::WHITE);
    }

    shapes::line(
        out,
        Vec2::new(0.0, PLAY_START_HEIGHT),
        Vec2::new(SCREEN_WIDTH, PLAY_START_HEIGHT),
        1.0,
        colors::WHITE,
    );
}

/// White box in the middle of the screen with black "Paused" text
fn draw_pause(out: &mut Vec<Vertex>) {
    let panel = pause_panel(measure_text(PAUSE_TEXT, PAUSE_FONT_SIZE));
    shapes::rect(out, &panel, colors::WHITE);

    let origin = panel.pos + Vec2::splat(PAUSE_PADDING);
    draw_text(out, PAUSE_TEXT, origin, PAUSE_FONT_SIZE, colors::BLACK);
}

/// Bounds of the pause box for a label `text_width` pixels wide
pub fn pause_panel(text_width: f32) -> Rect {
    let x = ((SCREEN_WIDTH - text_width) / 2.0).floor();
    let mid_y = (SCREEN_HEIGHT / 2.0).floor();
    Rect::new(
        x - PAUSE_PADDING,
        mid_y - PAUSE_BOX_HEIGHT / 2.0,
        text_width + 2.0 * PAUSE_PADDING,
        PAUSE_BOX_HEIGHT,
    )
}
