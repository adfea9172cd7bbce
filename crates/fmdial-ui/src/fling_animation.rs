//! Fling animation driver.
//!
//! Decays a release velocity frame by frame. Each frame hands the scroll
//! DELTA to a callback that returns how much of it was consumed; a shortfall
//! means a border was reached and the fling stops there.

use fmdial_animation::{FlingCalculator, FloatDecayAnimationSpec, SplineBasedDecaySpec};

use crate::config::GestureConfig;

/// Minimum unconsumed delta (in pixels) to consider a boundary hit.
const BOUNDARY_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlingStatus {
    /// More frames are needed.
    Running,
    /// The decay came to rest on its own.
    Finished,
    /// A border absorbed part of the last step.
    HitBoundary,
}

impl FlingStatus {
    pub fn is_running(self) -> bool {
        self == FlingStatus::Running
    }
}

/// State for an active fling. Positions are relative to where it started.
#[derive(Debug, Clone)]
struct FlingTrajectory {
    initial_velocity: f32,
    decay: SplineBasedDecaySpec,
    duration_nanos: i64,
    /// Frame time of the first frame; set lazily.
    start_frame_nanos: Option<u64>,
    elapsed_nanos: i64,
    last_value: f32,
}

#[derive(Debug, Clone)]
pub struct FlingAnimation {
    calculator: FlingCalculator,
    stop_velocity: f32,
    trajectory: Option<FlingTrajectory>,
}

impl FlingAnimation {
    pub fn new(config: &GestureConfig, density: f32) -> Self {
        Self {
            calculator: FlingCalculator::new(config.friction, density),
            stop_velocity: config.fling_stop_velocity,
            trajectory: None,
        }
    }

    /// Starts decaying `velocity` (px/sec), replacing any running fling.
    pub fn start(&mut self, velocity: f32) {
        let decay = SplineBasedDecaySpec::with_calculator(self.calculator)
            .with_velocity_threshold(self.stop_velocity);
        let duration_nanos = decay.duration_nanos(0.0, velocity);
        log::debug!(
            "fling start: velocity={velocity:.1}px/s distance={:.1}px duration={}ms",
            decay.target_value(0.0, velocity),
            duration_nanos / 1_000_000
        );
        self.trajectory = Some(FlingTrajectory {
            initial_velocity: velocity,
            decay,
            duration_nanos,
            start_frame_nanos: None,
            elapsed_nanos: 0,
            last_value: 0.0,
        });
    }

    /// Stops the fling where it is. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.trajectory.take().is_some();
        if was_running {
            log::debug!("fling cancelled");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.trajectory.is_some()
    }

    /// Time since the first frame of the running fling.
    pub fn elapsed_nanos(&self) -> Option<i64> {
        self.trajectory.as_ref().map(|trajectory| trajectory.elapsed_nanos)
    }

    /// Advances to `frame_time_nanos` and feeds the step to `on_scroll`.
    ///
    /// `on_scroll` returns the consumed amount. Anything but
    /// [`FlingStatus::Running`] means the trajectory is gone.
    pub fn advance<F>(&mut self, frame_time_nanos: u64, mut on_scroll: F) -> FlingStatus
    where
        F: FnMut(f32) -> f32,
    {
        let Some(trajectory) = self.trajectory.as_mut() else {
            return FlingStatus::Finished;
        };

        let start = *trajectory.start_frame_nanos.get_or_insert(frame_time_nanos);
        let play_time_nanos = frame_time_nanos.saturating_sub(start) as i64;
        trajectory.elapsed_nanos = play_time_nanos;

        let velocity = trajectory.initial_velocity;
        let value = trajectory.decay.value_at_nanos(play_time_nanos, 0.0, velocity);
        let delta = value - trajectory.last_value;
        trajectory.last_value = value;

        let current_velocity = trajectory.decay.velocity_at_nanos(play_time_nanos, 0.0, velocity);
        let finished = play_time_nanos >= trajectory.duration_nanos
            || (play_time_nanos > 0
                && current_velocity.abs() < trajectory.decay.abs_velocity_threshold());

        let consumed = if delta.abs() > 0.001 { on_scroll(delta) } else { 0.0 };
        let hit_boundary = (delta - consumed).abs() > BOUNDARY_EPSILON;

        log::trace!(
            "fling frame: t={}ms delta={delta:.2} consumed={consumed:.2} v={current_velocity:.1}",
            play_time_nanos / 1_000_000
        );

        let status = if hit_boundary {
            FlingStatus::HitBoundary
        } else if finished {
            FlingStatus::Finished
        } else {
            FlingStatus::Running
        };
        if !status.is_running() {
            log::debug!("fling stopped: {status:?} after {}ms", play_time_nanos / 1_000_000);
            self.trajectory = None;
        }
        status
    }
}
