use std::f64::consts::TAU;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Target length in pixels of one straight piece of a flattened arc.
const ARC_SEGMENT_PIXELS: f64 = 2.0;
const MIN_ARC_SEGMENTS: usize = 8;
const MAX_ARC_SEGMENTS: usize = 4096;

fn to_pixel(value: f64) -> i64 {
    value.floor() as i64
}

/// Draws a one pixel wide line with Bresenham's algorithm, clipped to the buffer.
///
/// Endpoints that are not finite make the whole segment a no-op.
pub fn draw_line(buffer: &mut PixelBuffer, from: Point, to: Point, colour: Colour) {
    if !from.is_finite() || !to.is_finite() {
        return;
    }

    let (mut x, mut y) = (to_pixel(from.x), to_pixel(from.y));
    let (x1, y1) = (to_pixel(to.x), to_pixel(to.y));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        // Pixels off the raster are skipped, the walk continues
        let _ = buffer.set_pixel(x, y, colour);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Flattens a circular arc into a polyline. Sweeps larger than a full turn are clamped.
#[must_use]
pub fn flatten_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Vec<Point> {
    let sweep = (end_angle - start_angle).clamp(-TAU, TAU);
    let arc_length = (radius * sweep).abs();
    let segments = ((arc_length / ARC_SEGMENT_PIXELS).ceil() as usize)
        .clamp(MIN_ARC_SEGMENTS, MAX_ARC_SEGMENTS);

    (0..=segments)
        .map(|step| {
            let angle = start_angle + sweep * step as f64 / segments as f64;
            Point {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
            }
        })
        .collect()
}

pub fn draw_polyline(buffer: &mut PixelBuffer, points: &[Point], colour: Colour) {
    if let [single] = points {
        draw_line(buffer, *single, *single, colour);
        return;
    }

    for pair in points.windows(2) {
        draw_line(buffer, pair[0], pair[1], colour);
    }
}
