//! Velocity tracking for fling gesture support.
//!
//! Uses the impulse strategy: velocity is derived from the kinetic energy the
//! pointer imparts across the recent samples, which is less sensitive to a
//! single noisy sample than a two-point slope.

use crate::gesture_constants::{ASSUME_STOPPED_MS, VELOCITY_HORIZON_MS};

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
///
/// ```
/// use fmdial_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_position(0, 0.0);
/// tracker.add_position(10, 50.0);
/// tracker.add_position(20, 100.0);
/// assert!(tracker.velocity() > 0.0); // px/sec
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot holding the newest sample.
    index: usize,
    horizon_ms: i64,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::with_horizon(VELOCITY_HORIZON_MS)
    }

    /// Creates a tracker that only considers samples newer than `horizon_ms`.
    pub fn with_horizon(horizon_ms: i64) -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
            horizon_ms: horizon_ms.max(1),
        }
    }

    /// Records the pointer position at `time_ms`.
    pub fn add_position(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second, or 0.0 when there is not enough recent motion.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Newest first; stop at the horizon or at the first pause in motion.
        let mut window = [Sample::default(); HISTORY_SIZE];
        let mut count = 0;
        let mut slot = self.index;
        let mut newer = newest;
        while let Some(sample) = self.samples[slot] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (newer.time_ms - sample.time_ms).abs();
            if age > self.horizon_ms || gap > ASSUME_STOPPED_MS {
                break;
            }
            window[count] = Sample {
                time_ms: -age,
                position: sample.position,
            };
            count += 1;
            newer = sample;
            if count == HISTORY_SIZE {
                break;
            }
            slot = if slot == 0 { HISTORY_SIZE - 1 } else { slot - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        let window = &mut window[..count];
        window.reverse();
        impulse_velocity(window) * 1000.0
    }

    /// Velocity in units/second, clamped to `±max_velocity`.
    pub fn velocity_capped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        if velocity.abs() > max_velocity {
            log::trace!("release velocity {velocity:.0} capped to {max_velocity:.0}");
        }
        velocity.clamp(-max_velocity, max_velocity)
    }
}

/// Impulse velocity in units/ms over samples ordered oldest to newest.
fn impulse_velocity(samples: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    for (i, pair) in samples.windows(2).enumerate() {
        let (older, newer) = (pair[0], pair[1]);
        if older.time_ms == newer.time_ms {
            continue;
        }
        let v_curr = (newer.position - older.position) / (newer.time_ms - older.time_ms) as f32;
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == 0 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        assert_eq!(VelocityTracker1D::new().velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn constant_motion() {
        let mut tracker = VelocityTracker1D::new();
        // 100 px every 10 ms
        for step in 0..4 {
            tracker.add_position(step * 10, step as f32 * 100.0);
        }

        let velocity = tracker.velocity();
        assert!(
            (velocity - 10_000.0).abs() < 1_000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn backwards_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 300.0);
        tracker.add_position(10, 200.0);
        tracker.add_position(20, 100.0);

        assert!(tracker.velocity() < 0.0);
    }

    #[test]
    fn velocity_is_capped_both_ways() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(1, 10_000.0);
        assert_eq!(tracker.velocity_capped(8_000.0), 8_000.0);

        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 10_000.0);
        tracker.add_position(1, 0.0);
        assert_eq!(tracker.velocity_capped(8_000.0), -8_000.0);

        assert_eq!(tracker.velocity_capped(0.0), 0.0);
    }

    #[test]
    fn samples_beyond_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::with_horizon(50);
        tracker.add_position(0, -5_000.0);
        tracker.add_position(100, 0.0);
        tracker.add_position(110, 10.0);
        tracker.add_position(120, 20.0);

        let velocity = tracker.velocity();
        assert!((velocity - 1_000.0).abs() < 100.0, "got {velocity}");
    }

    #[test]
    fn pause_before_release_means_no_velocity() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_position(0, 0.0);
        tracker.add_position(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn history_wraps_around() {
        let mut tracker = VelocityTracker1D::with_horizon(1_000);
        for step in 0..(HISTORY_SIZE as i64 * 3) {
            tracker.add_position(step * 5, step as f32 * 5.0);
        }
        let velocity = tracker.velocity();
        assert!((velocity - 1_000.0).abs() < 50.0, "got {velocity}");
    }
}
