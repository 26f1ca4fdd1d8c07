use crate::core::errors::EngineError;

/// Draws one complete chord-diagram frame.
pub trait FrameRenderer {
    fn render_frame(&mut self, table: f64, modulus: u32) -> Result<(), EngineError>;
}
