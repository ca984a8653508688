//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a plain triangle list and appended to a
//! caller-owned buffer so a whole frame shares one vertex upload.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Segments used for the ball outline
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Append two triangles covering the quad `a b c d` (in winding order)
fn quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
    out.extend_from_slice(&[
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
        Vertex::at(a, color),
    ]);
}

/// Filled axis-aligned rectangle
pub fn rect(out: &mut Vec<Vertex>, rect: &Rect, color: Color) {
    let min = rect.min();
    let max = rect.max();
    quad(
        out,
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    );
}

/// Filled circle as a triangle fan around `center`
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Color, segments: u32) {
    let segments = segments.max(3);
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::at(center, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        out.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }
}

/// Line segment from `a` to `b` with the given thickness
pub fn line(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, thickness: f32, color: Color) {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    // Perpendicular for width
    let half = dir.perp() * (thickness * 0.5);
    quad(out, a + half, b + half, b - half, a - half, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors::WHITE;

    #[test]
    fn test_rect_covers_corners() {
        let mut out = Vec::new();
        rect(&mut out, &Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(out.len(), 6);

        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_vertices_within_radius() {
        let mut out = Vec::new();
        let center = Vec2::new(100.0, 100.0);
        circle(&mut out, center, 8.0, WHITE, 16);
        assert_eq!(out.len(), 16 * 3);
        for v in &out {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 8.0 + 1e-3);
        }
    }

    #[test]
    fn test_horizontal_line_thickness() {
        let mut out = Vec::new();
        line(&mut out, Vec2::new(0.0, 50.0), Vec2::new(100.0, 50.0), 2.0, WHITE);
        assert_eq!(out.len(), 6);
        for v in &out {
            assert!((v.position[1] - 50.0).abs() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn test_degenerate_line_is_skipped() {
        let mut out = Vec::new();
        line(&mut out, Vec2::ONE, Vec2::ONE, 2.0, WHITE);
        assert!(out.is_empty());
    }
}
