pub mod font;
pub mod pixel_canvas;
pub mod raster;

pub use pixel_canvas::{PixelCanvas, PixelSurface};
