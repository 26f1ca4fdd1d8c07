use thiserror::Error;

use crate::core::errors::EngineError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("framebuffer error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("framebuffer resize failed: {0}")]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
