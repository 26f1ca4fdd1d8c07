use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::data::modulus::Modulus;
use crate::core::data::point::Point;
use crate::core::errors::EngineError;
use crate::core::ports::DrawingContext;

/// Evenly spaced points on a circle, addressed by a coordinate modulo the grid's modulus.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleGrid {
    center: Point,
    radius: f64,
    modulus: Modulus,
    angular_step: f64,
}

impl CircleGrid {
    pub fn new(center: Point, radius: f64, modulus: Modulus) -> Result<Self, EngineError> {
        validate(center, radius)?;

        Ok(Self {
            center,
            radius,
            modulus,
            angular_step: modulus.angular_step(),
        })
    }

    /// Replaces every field at once. Leaves the grid untouched when validation fails.
    pub fn calibrate(
        &mut self,
        center: Point,
        radius: f64,
        modulus: Modulus,
    ) -> Result<(), EngineError> {
        *self = Self::new(center, radius, modulus)?;
        Ok(())
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    #[must_use]
    pub fn angular_step(&self) -> f64 {
        self.angular_step
    }

    /// Position of `coordinate` on the circle. Coordinate 0 sits at the top, values
    /// increase clockwise, and negative or fractional coordinates wrap like any other.
    #[must_use]
    pub fn point_for(&self, coordinate: f64) -> Point {
        let wrapped = coordinate.rem_euclid(self.modulus.as_f64());
        let angle = wrapped * self.angular_step - FRAC_PI_2;

        Point {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        }
    }

    pub fn draw_outline<C: DrawingContext + ?Sized>(&self, context: &mut C) {
        context.begin_path();
        context.arc(self.center, self.radius, 0.0, TAU);
        context.stroke();
    }
}

fn validate(center: Point, radius: f64) -> Result<(), EngineError> {
    EngineError::require_finite("center x", center.x)?;
    EngineError::require_finite("center y", center.y)?;
    EngineError::require_finite("radius", radius)?;

    if radius <= 0.0 {
        return Err(EngineError::invalid_parameter(
            "radius",
            format!("{radius} must be greater than zero"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(modulus: u32) -> CircleGrid {
        CircleGrid::new(Point::new(100.0, 80.0), 50.0, Modulus::new(modulus).unwrap()).unwrap()
    }

    #[test]
    fn coordinate_zero_is_at_the_top() {
        let point = grid(10).point_for(0.0);

        assert_relative_eq!(point.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_is_to_the_right() {
        let point = grid(4).point_for(1.0);

        assert_relative_eq!(point.x, 150.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn points_repeat_every_modulus() {
        for modulus in [1, 2, 3, 7, 10, 200] {
            let grid = grid(modulus);
            let m = f64::from(modulus);

            for coordinate in [0.0, 0.5, 1.0, 3.25, 17.0, -1.0, -4.75, 1234.5] {
                let a = grid.point_for(coordinate);
                let b = grid.point_for(coordinate + m);

                assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
                assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn every_point_lies_on_the_circle() {
        let grid = grid(13);

        for coordinate in [-100.5, -1.0, 0.0, 0.3, 6.5, 12.999, 250.0] {
            let distance = grid.point_for(coordinate).distance_to(grid.center());
            assert_relative_eq!(distance, grid.radius(), epsilon = 1e-9);
        }
    }

    #[test]
    fn negative_coordinates_wrap_forwards() {
        let grid = grid(10);
        let a = grid.point_for(-1.0);
        let b = grid.point_for(9.0);

        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }

    #[test]
    fn angular_step_tracks_modulus() {
        let mut grid = grid(4);
        assert_relative_eq!(grid.angular_step(), FRAC_PI_2);

        grid.calibrate(Point::new(0.0, 0.0), 10.0, Modulus::new(8).unwrap())
            .unwrap();

        assert_eq!(grid.modulus().get(), 8);
        assert_relative_eq!(grid.angular_step(), TAU / 8.0);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let modulus = Modulus::new(5).unwrap();

        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = CircleGrid::new(Point::new(0.0, 0.0), radius, modulus);
            assert!(result.unwrap_err().is_invalid_parameter());
        }
    }

    #[test]
    fn non_finite_center_is_rejected() {
        let modulus = Modulus::new(5).unwrap();

        assert!(CircleGrid::new(Point::new(f64::NAN, 0.0), 1.0, modulus).is_err());
        assert!(CircleGrid::new(Point::new(0.0, f64::NEG_INFINITY), 1.0, modulus).is_err());
    }

    #[test]
    fn failed_calibration_keeps_previous_configuration() {
        let mut grid = grid(6);
        let before = grid;

        let bad_radius = grid.calibrate(Point::new(1.0, 1.0), -5.0, Modulus::new(9).unwrap());
        let bad_modulus = Modulus::try_from(2.5)
            .and_then(|modulus| grid.calibrate(Point::new(1.0, 1.0), 5.0, modulus));

        assert!(bad_radius.unwrap_err().is_invalid_parameter());
        assert!(bad_modulus.unwrap_err().is_invalid_parameter());
        assert_eq!(grid, before);
    }
}
