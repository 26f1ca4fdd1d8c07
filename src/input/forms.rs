use crate::controllers::animation::AnimationController;
use crate::controllers::ports::FrameRenderer;
use crate::core::data::modulus::Modulus;
use crate::core::errors::EngineError;

/// Frame rate of every animation started from a form.
pub const ANIMATION_FRAMES_PER_SECOND: f64 = 60.0;

fn parse_number(name: &'static str, raw: &str) -> Result<f64, EngineError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| EngineError::invalid_parameter(name, format!("{raw:?} is not a number")))?;

    EngineError::require_finite(name, value)
}

fn parse_modulus(raw: &str) -> Result<Modulus, EngineError> {
    Modulus::try_from(parse_number("modulus", raw)?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRenderRequest {
    pub table: f64,
    pub modulus: Modulus,
}

/// Single static frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedRenderForm {
    pub table: String,
    pub modulo: String,
}

impl FixedRenderForm {
    pub fn parse(&self) -> Result<FixedRenderRequest, EngineError> {
        Ok(FixedRenderRequest {
            table: parse_number("table", &self.table)?,
            modulus: parse_modulus(&self.modulo)?,
        })
    }

    pub fn submit<R: FrameRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), EngineError> {
        let request = self.parse()?;
        renderer.render_frame(request.table, request.modulus.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedRenderRequest {
    pub table_start: f64,
    pub table_end: f64,
    /// Reciprocal of the entered precision.
    pub step: f64,
    pub modulus: Modulus,
}

/// Table sweep; `precision` is the number of frames per unit of table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimatedRenderForm {
    pub table_start: String,
    pub table_end: String,
    pub precision: String,
    pub modulo: String,
}

impl AnimatedRenderForm {
    pub fn parse(&self) -> Result<AnimatedRenderRequest, EngineError> {
        let table_start = parse_number("table start", &self.table_start)?;
        let table_end = parse_number("table end", &self.table_end)?;
        let precision = parse_number("precision", &self.precision)?;
        let modulus = parse_modulus(&self.modulo)?;

        if precision <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "precision",
                format!("{precision} must be greater than zero"),
            ));
        }

        Ok(AnimatedRenderRequest {
            table_start,
            table_end,
            step: 1.0 / precision,
            modulus,
        })
    }

    /// Configures the sweep and starts it.
    pub fn submit<R: FrameRenderer>(
        &self,
        controller: &mut AnimationController<R>,
    ) -> Result<(), EngineError> {
        let request = self.parse()?;

        controller.set_animation(
            request.table_start,
            request.table_end,
            request.step,
            request.modulus.as_f64(),
            ANIMATION_FRAMES_PER_SECOND,
        )?;
        controller.start()
    }
}
