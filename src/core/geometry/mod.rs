pub mod circle_grid;

pub use circle_grid::CircleGrid;
