pub mod animation;
pub mod engine;
pub mod ports;
