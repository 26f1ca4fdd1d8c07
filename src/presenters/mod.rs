pub mod canvas;
pub mod pixel_format;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod recording;
