//! Input adapters for the chord renderer.
//!
//! Forms turn user-entered strings into engine and animation calls. The
//! windowed host lives behind the `gui` feature.

pub mod forms;
#[cfg(feature = "gui")]
pub mod gui;
