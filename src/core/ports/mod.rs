pub mod drawing_surface;

pub use drawing_surface::{DrawingContext, SurfaceHandle};
