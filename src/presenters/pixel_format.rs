//! Conversions between the canvas byte layout and framebuffer layouts.

use thiserror::Error;

use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source of {len} bytes is not a whole number of pixels")]
    PartialPixel { len: usize },
    #[error("rgba destination holds {actual} bytes, {expected} needed")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Copies RGB bytes into an RGBA frame with full opacity.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % BYTES_PER_PIXEL != 0 {
        return Err(PixelFormatError::PartialPixel { len: src.len() });
    }

    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;
    if dst.len() != expected {
        return Err(PixelFormatError::SizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }

    Ok(())
}
