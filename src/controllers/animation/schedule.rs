use std::time::Duration;

use log::warn;

pub const DEFAULT_MAX_TICKS_PER_ADVANCE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleLimits {
    /// Frames fired by one `advance` call at most. Time beyond that is dropped.
    pub max_ticks_per_advance: u32,
}

impl Default for ScheduleLimits {
    fn default() -> Self {
        Self {
            max_ticks_per_advance: DEFAULT_MAX_TICKS_PER_ADVANCE,
        }
    }
}

/// Fixed-period frame clock fed by the host's elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSchedule {
    period_secs: f64,
    limits: ScheduleLimits,
    accumulator_secs: f64,
}

impl FrameSchedule {
    #[must_use]
    pub fn new(period_secs: f64, limits: ScheduleLimits) -> Self {
        Self {
            period_secs,
            limits,
            accumulator_secs: 0.0,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period_secs)
    }

    /// Adds `elapsed` and returns how many frames fell due.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        let dt = self.period_secs;
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt).floor();
        let max_ticks = f64::from(self.limits.max_ticks_per_advance);
        let ticks_due = ticks_available.min(max_ticks) as u32;

        if ticks_available > max_ticks {
            warn!(
                "frame schedule fell behind, dropping {} frames",
                ticks_available - max_ticks
            );
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs -= f64::from(ticks_due) * dt;
            if self.accumulator_secs < 0.0 {
                self.accumulator_secs = 0.0;
            }
        }

        ticks_due
    }

    /// Time left until the next frame falls due.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Duration {
        let remaining = self.period_secs - self.accumulator_secs;
        if remaining.is_finite() && remaining > 0.0 {
            Duration::from_secs_f64(remaining)
        } else {
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(hz: f64) -> FrameSchedule {
        FrameSchedule::new(1.0 / hz, ScheduleLimits::default())
    }

    #[test]
    fn exact_period_is_one_tick() {
        let mut schedule = schedule(4.0);

        assert_eq!(schedule.accumulate(Duration::from_millis(250)), 1);
    }

    #[test]
    fn several_periods_are_several_ticks() {
        let mut schedule = schedule(4.0);

        assert_eq!(schedule.accumulate(Duration::from_millis(750)), 3);
    }

    #[test]
    fn remainder_carries_to_next_call() {
        let mut schedule = schedule(2.0);

        assert_eq!(schedule.accumulate(Duration::from_millis(250)), 0);
        assert_eq!(schedule.time_until_next_tick(), Duration::from_millis(250));
        assert_eq!(schedule.accumulate(Duration::from_millis(250)), 1);
    }

    #[test]
    fn zero_elapsed_is_no_tick() {
        let mut schedule = schedule(60.0);

        assert_eq!(schedule.accumulate(Duration::ZERO), 0);
        assert_eq!(schedule.time_until_next_tick(), schedule.period());
    }

    #[test]
    fn large_elapsed_is_capped_and_excess_dropped() {
        let mut schedule = FrameSchedule::new(
            0.1,
            ScheduleLimits {
                max_ticks_per_advance: 3,
            },
        );

        assert_eq!(schedule.accumulate(Duration::from_secs(5)), 3);
        assert_eq!(schedule.accumulate(Duration::ZERO), 0);
    }

    #[test]
    fn invalid_period_never_ticks() {
        let mut schedule = FrameSchedule::new(0.0, ScheduleLimits::default());

        assert_eq!(schedule.accumulate(Duration::from_secs(1)), 0);
    }
}
