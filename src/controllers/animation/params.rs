use crate::core::data::modulus::Modulus;
use crate::core::errors::EngineError;

/// A validated table sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    table_start: f64,
    table_end: f64,
    step: f64,
    modulus: Modulus,
    frames_per_second: f64,
}

impl AnimationParams {
    /// Fails when any value is not finite, the frame rate is not positive, the
    /// modulus is not a positive integer, or `step` cannot reach `table_end`.
    pub fn new(
        table_start: f64,
        table_end: f64,
        step: f64,
        modulus: f64,
        frames_per_second: f64,
    ) -> Result<Self, EngineError> {
        let table_start = EngineError::require_finite("table start", table_start)?;
        let table_end = EngineError::require_finite("table end", table_end)?;
        let step = EngineError::require_finite("step", step)?;
        let frames_per_second = EngineError::require_finite("frame rate", frames_per_second)?;
        let modulus = Modulus::try_from(modulus)?;

        if frames_per_second <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "frame rate",
                format!("{frames_per_second} must be greater than zero"),
            ));
        }

        if step == 0.0 {
            return Err(EngineError::invalid_parameter("step", "must not be zero"));
        }

        if (table_end - table_start) * step < 0.0 {
            return Err(EngineError::invalid_parameter(
                "step",
                format!("{step} moves away from the end value {table_end}"),
            ));
        }

        Ok(Self {
            table_start,
            table_end,
            step,
            modulus,
            frames_per_second,
        })
    }

    #[must_use]
    pub fn table_start(&self) -> f64 {
        self.table_start
    }

    #[must_use]
    pub fn table_end(&self) -> f64 {
        self.table_end
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    #[must_use]
    pub fn frames_per_second(&self) -> f64 {
        self.frames_per_second
    }

    /// Seconds between two frames.
    #[must_use]
    pub fn frame_period(&self) -> f64 {
        1.0 / self.frames_per_second
    }

    /// True once `table` has moved past the end value in the sweep direction.
    #[must_use]
    pub fn is_past_end(&self, table: f64) -> bool {
        if self.step > 0.0 {
            table > self.table_end
        } else {
            table < self.table_end
        }
    }
}
