//! Modular multiplication table renderer.
//!
//! `modulus` points sit evenly on a circle and point `i` is joined to point
//! `i * table`. [`RenderEngine`] draws one frame on anything implementing
//! [`DrawingContext`]; [`AnimationController`] sweeps the table value over time.

pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::animation::{
    AdvanceReport, AnimationController, AnimationParams, AnimationState, FrameSchedule,
    ScheduleLimits,
};
pub use controllers::engine::{Dimensions, EngineConfig, RenderEngine};
pub use controllers::ports::FrameRenderer;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::modulus::Modulus;
pub use crate::core::data::point::Point;
pub use crate::core::errors::EngineError;
pub use crate::core::geometry::CircleGrid;
pub use crate::core::ports::{DrawingContext, SurfaceHandle};
pub use input::forms::{
    ANIMATION_FRAMES_PER_SECOND, AnimatedRenderForm, AnimatedRenderRequest, FixedRenderForm,
    FixedRenderRequest,
};
pub use presenters::canvas::{PixelCanvas, PixelSurface};
pub use presenters::recording::{DrawCommand, PathSegment, RecordingCanvas, RecordingSurface};

#[cfg(feature = "gui")]
pub use input::gui::{GuiCommand, GuiError};
#[cfg(feature = "gui")]
pub use presenters::pixels::PixelsPresenterFactory;
