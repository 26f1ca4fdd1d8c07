//! Port for the host's 2D drawing API.
//!
//! Mirrors the small subset of a canvas-style immediate mode API the engine
//! needs. All coordinates are pixels with the origin at the top-left corner and
//! the y axis pointing down.

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

pub trait DrawingContext {
    /// Current surface width in pixels.
    fn width(&self) -> f64;
    /// Current surface height in pixels.
    fn height(&self) -> f64;

    fn set_stroke_colour(&mut self, colour: Colour);
    fn set_fill_colour(&mut self, colour: Colour);

    /// Fills an axis-aligned rectangle with the fill colour.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    /// Adds a circular arc from `start_angle` to `end_angle` (radians, clockwise on screen).
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    /// Strokes the current path with the stroke colour.
    fn stroke(&mut self);

    /// Draws `text` with its baseline starting at `position`.
    fn fill_text(&mut self, text: &str, position: Point);
}

/// Something a render engine can be bound to.
///
/// Returns `None` when no usable 2D context can be obtained from the handle.
pub trait SurfaceHandle {
    type Context: DrawingContext;

    fn context_2d(self) -> Option<Self::Context>;
}
