mod recording_canvas;

pub use recording_canvas::{DrawCommand, PathSegment, RecordingCanvas, RecordingSurface};
