use std::f64::consts::TAU;
use std::fmt;
use std::num::NonZeroU32;

use crate::core::errors::EngineError;

/// Number of evenly spaced points on the circle. Always at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Modulus(NonZeroU32);

impl Modulus {
    pub fn new(value: u32) -> Result<Self, EngineError> {
        NonZeroU32::new(value).map(Self).ok_or_else(|| {
            EngineError::invalid_parameter("modulus", "must be a positive integer, got 0")
        })
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0.get())
    }

    /// Angle in radians between two consecutive grid points.
    #[must_use]
    pub fn angular_step(self) -> f64 {
        TAU / self.as_f64()
    }
}

impl TryFrom<f64> for Modulus {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let value = EngineError::require_finite("modulus", value)?;

        if value.fract() != 0.0 {
            return Err(EngineError::invalid_parameter(
                "modulus",
                format!("{value} is not an integer"),
            ));
        }
        if value < 1.0 || value > f64::from(u32::MAX) {
            return Err(EngineError::invalid_parameter(
                "modulus",
                format!("{value} is outside 1..={}", u32::MAX),
            ));
        }

        Self::new(value as u32)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        let result = Modulus::new(0);

        assert!(result.unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(Modulus::new(1).unwrap().get(), 1);
        assert_eq!(Modulus::new(200).unwrap().get(), 200);
        assert_eq!(Modulus::try_from(10.0).unwrap().get(), 10);
    }

    #[test]
    fn non_integer_and_non_positive_reals_are_rejected() {
        for value in [2.5, 0.0, -3.0, -0.5, f64::NAN, f64::INFINITY, 1e12] {
            let result = Modulus::try_from(value);
            assert!(
                result.as_ref().is_err_and(EngineError::is_invalid_parameter),
                "{value} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn angular_step_divides_full_turn() {
        let modulus = Modulus::new(4).unwrap();

        assert!((modulus.angular_step() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(modulus.to_string(), "4");
    }
}
