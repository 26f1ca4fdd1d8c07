use thiserror::Error;

use crate::core::data::pixel_rect::PixelRectError;

/// Failures surfaced by the geometry, render and animation layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("invalid drawing surface: {0}")]
    InvalidSurface(String),
}

impl EngineError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::invalid_parameter(name, format!("{value} is not a finite number")))
        }
    }

    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    #[must_use]
    pub fn is_invalid_surface(&self) -> bool {
        matches!(self, Self::InvalidSurface(_))
    }
}

impl From<PixelRectError> for EngineError {
    fn from(err: PixelRectError) -> Self {
        Self::InvalidSurface(err.to_string())
    }
}
