use thiserror::Error;

/// Smallest raster the canvas accepts along either axis.
pub const MIN_PIXEL_EXTENT: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect must be at least {MIN_PIXEL_EXTENT}x{MIN_PIXEL_EXTENT}: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Size of a raster surface, anchored at the origin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width < MIN_PIXEL_EXTENT || height < MIN_PIXEL_EXTENT {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_new_valid() {
        let rect = PixelRect::new(100, 50).unwrap();

        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
        assert_eq!(rect.size(), 5000);
    }

    #[test]
    fn test_pixel_rect_must_be_at_least_two_pixels_wide_and_tall() {
        assert_eq!(
            PixelRect::new(0, 0),
            Err(PixelRectError::InvalidSize { width: 0, height: 0 })
        );
        assert_eq!(
            PixelRect::new(10, 1),
            Err(PixelRectError::InvalidSize { width: 10, height: 1 })
        );
        assert_eq!(
            PixelRect::new(1, 10),
            Err(PixelRectError::InvalidSize { width: 1, height: 10 })
        );
        assert!(PixelRect::new(2, 2).is_ok());
    }

    #[test]
    fn test_pixel_rect_contains() {
        let rect = PixelRect::new(100, 100).unwrap();

        assert!(rect.contains(0, 0));
        assert!(rect.contains(99, 99));
        assert!(rect.contains(50, 20));
        assert!(!rect.contains(100, 50));
        assert!(!rect.contains(50, 100));
        assert!(!rect.contains(-1, 50));
        assert!(!rect.contains(50, -1));
    }
}
