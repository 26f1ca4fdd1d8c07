use std::time::Duration;

use log::{info, warn};

use crate::controllers::animation::params::AnimationParams;
use crate::controllers::animation::schedule::{FrameSchedule, ScheduleLimits};
use crate::controllers::animation::state::{AdvanceReport, AnimationState};
use crate::controllers::ports::FrameRenderer;
use crate::core::errors::EngineError;

/// Sweeps the table value across a configured range, one rendered frame per
/// scheduled tick.
///
/// The host drives time through [`AnimationController::advance`]; there is no
/// timer thread. At most one schedule exists at a time.
pub struct AnimationController<R: FrameRenderer> {
    renderer: R,
    limits: ScheduleLimits,
    params: Option<AnimationParams>,
    current_table: Option<f64>,
    schedule: Option<FrameSchedule>,
}

impl<R: FrameRenderer> AnimationController<R> {
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self::with_limits(renderer, ScheduleLimits::default())
    }

    #[must_use]
    pub fn with_limits(renderer: R, limits: ScheduleLimits) -> Self {
        Self {
            renderer,
            limits,
            params: None,
            current_table: None,
            schedule: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        match (&self.params, &self.schedule, self.current_table) {
            (None, _, _) => AnimationState::Idle,
            (Some(_), Some(_), _) => AnimationState::Running,
            (Some(_), None, Some(_)) => AnimationState::Paused,
            (Some(_), None, None) => AnimationState::Configured,
        }
    }

    #[must_use]
    pub fn current_table(&self) -> Option<f64> {
        self.current_table
    }

    #[must_use]
    pub fn params(&self) -> Option<&AnimationParams> {
        self.params.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Replaces the configuration. Any running sweep is stopped first; on
    /// error nothing changes.
    pub fn set_animation(
        &mut self,
        table_start: f64,
        table_end: f64,
        step: f64,
        modulus: f64,
        frames_per_second: f64,
    ) -> Result<(), EngineError> {
        let params =
            AnimationParams::new(table_start, table_end, step, modulus, frames_per_second)?;

        self.schedule = None;
        self.current_table = None;
        self.params = Some(params);
        info!(
            "animation configured: table {table_start} to {table_end} step {step}, modulus {}, {frames_per_second} fps",
            params.modulus()
        );

        Ok(())
    }

    /// Starts or resumes the sweep. Calling it while running changes nothing.
    pub fn start(&mut self) -> Result<(), EngineError> {
        let params = match (self.state(), self.params) {
            (AnimationState::Running, _) => return Ok(()),
            (_, Some(params)) => params,
            (_, None) => {
                return Err(EngineError::invalid_parameter(
                    "animation",
                    "nothing configured to start",
                ));
            }
        };

        let table = *self.current_table.get_or_insert(params.table_start());
        self.schedule = Some(FrameSchedule::new(params.frame_period(), self.limits));
        info!("animation running from table {table}");

        Ok(())
    }

    /// Renders the current frame and steps the table. Does nothing unless running.
    ///
    /// A render failure stops the animation.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        if !self.state().is_running() {
            return Ok(());
        }
        let (Some(params), Some(table)) = (self.params, self.current_table) else {
            return Ok(());
        };

        if let Err(err) = self.renderer.render_frame(table, params.modulus().get()) {
            warn!("animation frame at table {table} failed: {err}");
            self.stop();
            return Err(err);
        }

        let next = table + params.step();
        if params.is_past_end(next) {
            info!("animation finished at table {table}");
            self.stop();
        } else {
            self.current_table = Some(next);
        }

        Ok(())
    }

    /// Feeds host time into the schedule and runs every frame that fell due.
    pub fn advance(&mut self, elapsed: Duration) -> Result<AdvanceReport, EngineError> {
        let Some(schedule) = self.schedule.as_mut() else {
            return Ok(AdvanceReport::default());
        };

        let ticks_due = schedule.accumulate(elapsed);
        let mut report = AdvanceReport::default();

        for _ in 0..ticks_due {
            self.tick()?;
            report.ticks_run += 1;

            if self.state() == AnimationState::Idle {
                report.finished = true;
                break;
            }
        }

        Ok(report)
    }

    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.schedule
            .as_ref()
            .map(FrameSchedule::time_until_next_tick)
    }

    pub fn pause(&mut self) {
        if self.schedule.take().is_some() {
            info!("animation paused at table {:?}", self.current_table);
        }
    }

    /// Drops the schedule, the current table and the configuration.
    pub fn stop(&mut self) {
        if self.params.take().is_some() {
            info!("animation stopped");
        }
        self.schedule = None;
        self.current_table = None;
    }
}
