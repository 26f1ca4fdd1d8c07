use log::debug;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use crate::core::ports::{DrawingContext, SurfaceHandle};
use crate::presenters::canvas::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, glyph_for, lit_cells};
use crate::presenters::canvas::raster::{draw_polyline, flatten_arc};

/// Requested size of an off-screen raster surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    pub width: u32,
    pub height: u32,
}

impl SurfaceHandle for PixelSurface {
    type Context = PixelCanvas;

    fn context_2d(self) -> Option<PixelCanvas> {
        PixelCanvas::new(self.width, self.height).ok()
    }
}

/// Software rasterizer implementing the drawing port on top of a [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    buffer: PixelBuffer,
    stroke_colour: Colour,
    fill_colour: Colour,
    subpaths: Vec<Vec<Point>>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let pixel_rect = PixelRect::new(width, height)?;

        Ok(Self {
            buffer: PixelBuffer::new(pixel_rect),
            stroke_colour: Colour::BLACK,
            fill_colour: Colour::BLACK,
            subpaths: Vec::new(),
        })
    }

    /// Reallocates the raster. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelRectError> {
        let pixel_rect = PixelRect::new(width, height)?;

        if pixel_rect != self.buffer.pixel_rect() {
            debug!("resizing pixel canvas to {width}x{height}");
            self.buffer = PixelBuffer::new(pixel_rect);
        }

        Ok(())
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn stroke_colour(&self) -> Colour {
        self.stroke_colour
    }

    #[must_use]
    pub fn fill_colour(&self) -> Colour {
        self.fill_colour
    }

    fn current_subpath(&mut self, start: Point) -> &mut Vec<Point> {
        if self.subpaths.last().is_none_or(Vec::is_empty) {
            self.subpaths.push(vec![start]);
        }

        // The branch above guarantees a non-empty last subpath
        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }
}

impl DrawingContext for PixelCanvas {
    fn width(&self) -> f64 {
        f64::from(self.buffer.pixel_rect().width())
    }

    fn height(&self) -> f64 {
        f64::from(self.buffer.pixel_rect().height())
    }

    fn set_stroke_colour(&mut self, colour: Colour) {
        self.stroke_colour = colour;
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, x1) = ordered(x, x + width);
        let (y0, y1) = ordered(y, y + height);

        if ![x0, x1, y0, y1].iter().all(|value| value.is_finite()) {
            return;
        }

        self.buffer.fill_span(
            x0.round() as i64,
            y0.round() as i64,
            x1.round() as i64,
            y1.round() as i64,
            self.fill_colour,
        );
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Point) {
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: Point) {
        self.current_subpath(point).push(point);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
            return;
        }

        let points = flatten_arc(center, radius, start_angle, end_angle);
        // A canvas arc joins the current point to its own start with a straight line
        self.current_subpath(points[0]).extend(points);
    }

    fn stroke(&mut self) {
        for subpath in &self.subpaths {
            draw_polyline(&mut self.buffer, subpath, self.stroke_colour);
        }
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        if !position.is_finite() {
            return;
        }

        let left = position.x.round() as i64;
        let top = position.y.round() as i64 - i64::from(GLYPH_HEIGHT);

        for (index, ch) in text.chars().enumerate() {
            let Some(glyph) = glyph_for(ch) else { continue };
            let origin_x = left + index as i64 * i64::from(GLYPH_ADVANCE);

            for (col, row) in lit_cells(glyph) {
                let _ = self.buffer.set_pixel(
                    origin_x + i64::from(col),
                    top + i64::from(row),
                    self.fill_colour,
                );
            }
        }
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
