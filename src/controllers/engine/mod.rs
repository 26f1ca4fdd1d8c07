pub mod engine_config;
pub mod render_engine;

pub use engine_config::EngineConfig;
pub use render_engine::{Dimensions, RenderEngine};
