pub mod compute_chords;
pub mod compute_chords_rayon;

pub use compute_chords::{Chord, chord_for, compute_chords};
pub use compute_chords_rayon::{CHORD_BATCH_SIZE, PARALLEL_CHORD_THRESHOLD, for_each_chord_rayon};
