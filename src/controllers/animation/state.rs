#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Configured,
    Running,
    Paused,
}

impl AnimationState {
    #[must_use]
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// Outcome of one [`AnimationController::advance`](super::AnimationController::advance) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceReport {
    pub ticks_run: u32,
    /// The sweep passed its end value during this call.
    pub finished: bool,
}
