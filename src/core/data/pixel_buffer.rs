use rayon::prelude::*;
use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {width}x{height} bounds")]
    PixelOutsideBounds { x: i64, y: i64, width: u32, height: u32 },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB raster.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        let total_bytes = pixel_rect_to_buffer_size(pixel_rect);

        Self {
            pixel_rect,
            buffer: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, x: i64, y: i64) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.pixel_rect.width(),
                height: self.pixel_rect.height(),
            });
        }

        Ok((y as usize * self.pixel_rect.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    pub fn pixel(&self, x: i64, y: i64) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok(Colour::rgb(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    /// Paints every pixel of the half-open span `[x0, x1) x [y0, y1)`, clipped to the buffer.
    pub fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        let width = i64::from(self.pixel_rect.width());
        let height = i64::from(self.pixel_rect.height());
        let (x0, x1) = (x0.clamp(0, width), x1.clamp(0, width));
        let (y0, y1) = (y0.clamp(0, height), y1.clamp(0, height));

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let bytes = colour.to_bytes();
        let start = y0 as usize * row_bytes;
        let end = y1 as usize * row_bytes;

        self.buffer[start..end]
            .par_chunks_exact_mut(row_bytes)
            .for_each(|row| {
                for pixel in row[x0 as usize * BYTES_PER_PIXEL..x1 as usize * BYTES_PER_PIXEL]
                    .chunks_exact_mut(BYTES_PER_PIXEL)
                {
                    pixel.copy_from_slice(&bytes);
                }
            });
    }

    /// Number of pixels currently holding `colour`.
    #[must_use]
    pub fn count_colour(&self, colour: Colour) -> usize {
        let bytes = colour.to_bytes();

        self.buffer
            .par_chunks_exact(BYTES_PER_PIXEL)
            .filter(|pixel| *pixel == bytes)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let pixel_rect = create_pixel_rect(10, 10);
        let buffer = PixelBuffer::new(pixel_rect);

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer_size(), 300); // 10 * 10 * 3
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_writes_rgb_triplet() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 2));
        let red = Colour::rgb(255, 0, 0);

        buffer.set_pixel(2, 1, red).unwrap();

        assert_eq!(buffer.pixel(2, 1).unwrap(), red);
        assert_eq!(&buffer.buffer()[15..18], &[255, 0, 0]);
        assert_eq!(buffer.count_colour(red), 1);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 2));
        let result = buffer.set_pixel(3, 0, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2,
            })
        );
    }

    #[test]
    fn test_fill_span_is_clipped_to_bounds() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 4));

        buffer.fill_span(-5, 2, 100, 100, Colour::WHITE);

        assert_eq!(buffer.count_colour(Colour::WHITE), 8);
        assert_eq!(buffer.pixel(0, 1).unwrap(), Colour::BLACK);
        assert_eq!(buffer.pixel(3, 3).unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_fill_span_empty_when_inverted() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 4));

        buffer.fill_span(3, 3, 1, 1, Colour::WHITE);

        assert_eq!(buffer.count_colour(Colour::WHITE), 0);
    }
}
