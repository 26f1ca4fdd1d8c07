pub mod controller;
pub mod params;
pub mod schedule;
pub mod state;

pub use controller::AnimationController;
pub use params::AnimationParams;
pub use schedule::{FrameSchedule, ScheduleLimits};
pub use state::{AdvanceReport, AnimationState};
