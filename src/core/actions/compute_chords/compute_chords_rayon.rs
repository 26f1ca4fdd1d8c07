use rayon::prelude::*;

use crate::core::actions::compute_chords::compute_chords::{Chord, chord_for};
use crate::core::geometry::CircleGrid;

/// Below this many grid points the sequential path wins.
pub const PARALLEL_CHORD_THRESHOLD: u32 = 4096;

/// Chords computed per parallel batch. Caps the memory one frame holds at
/// this many chords whatever the modulus.
pub const CHORD_BATCH_SIZE: u32 = 1 << 16;

/// Hands every chord to `visit` in index order.
///
/// Large grids are computed in fixed-size batches on rayon's pool; small
/// grids are streamed straight from [`chord_for`].
pub fn for_each_chord_rayon<F>(grid: &CircleGrid, table: f64, mut visit: F)
where
    F: FnMut(Chord),
{
    let modulus = grid.modulus().get();

    if modulus < PARALLEL_CHORD_THRESHOLD {
        (0..modulus).for_each(|index| visit(chord_for(grid, index, table)));
        return;
    }

    let mut batch = Vec::with_capacity(CHORD_BATCH_SIZE as usize);
    let mut start = 0;
    while start < modulus {
        let end = start.saturating_add(CHORD_BATCH_SIZE).min(modulus);

        (start..end)
            .into_par_iter()
            .map(|index| chord_for(grid, index, table))
            .collect_into_vec(&mut batch);
        batch.drain(..).for_each(&mut visit);

        start = end;
    }
}
