pub mod compute_chords;
