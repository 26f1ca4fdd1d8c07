use crate::core::data::point::Point;
use crate::core::geometry::CircleGrid;

/// Segment joining grid coordinate `i` to `i * table`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Chord {
    pub start: Point,
    pub end: Point,
}

#[must_use]
pub fn chord_for(grid: &CircleGrid, index: u32, table: f64) -> Chord {
    let coordinate = f64::from(index);

    Chord {
        start: grid.point_for(coordinate),
        end: grid.point_for(coordinate * table),
    }
}

/// One chord per grid point, in index order.
#[must_use]
pub fn compute_chords(grid: &CircleGrid, table: f64) -> Vec<Chord> {
    (0..grid.modulus().get())
        .map(|index| chord_for(grid, index, table))
        .collect()
}
