pub mod actions;
pub mod data;
pub mod errors;
pub mod geometry;
pub mod ports;
