//! Decay animation specification for fling scrolling.
//!
//! The curve follows the spline used by Android's `OverScroller`, which is what
//! the original platform dial delegated its flings to.

use std::sync::LazyLock;

// ============================================================================
// Scroller spline
// ============================================================================

/// Tension curve inflection point
const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

/// Number of intervals in the distance lookup table.
const SAMPLE_COUNT: usize = 100;

/// Upper bound on bisection steps when inverting the bezier for one sample.
const MAX_BISECTION_STEPS: usize = 64;

/// Fraction of the total fling distance covered at `i / SAMPLE_COUNT` of its duration.
static DISTANCE_TABLE: LazyLock<[f32; SAMPLE_COUNT + 1]> = LazyLock::new(build_distance_table);

fn build_distance_table() -> [f32; SAMPLE_COUNT + 1] {
    let mut table = [0.0f32; SAMPLE_COUNT + 1];
    // Alpha grows monotonically, so each search can start where the last one ended.
    let mut lower = 0.0f32;

    for (i, slot) in table.iter_mut().enumerate().take(SAMPLE_COUNT) {
        let alpha = i as f32 / SAMPLE_COUNT as f32;
        let mut upper = 1.0f32;
        let mut x = lower;
        for _ in 0..MAX_BISECTION_STEPS {
            x = lower + (upper - lower) / 2.0;
            let time = bezier(x, P1, P2);
            if (time - alpha).abs() < 1e-5 {
                break;
            }
            if time > alpha {
                upper = x;
            } else {
                lower = x;
            }
        }
        *slot = bezier(x, START_TENSION, 1.0);
    }

    table[SAMPLE_COUNT] = 1.0;
    table
}

/// Cubic bezier through (0,0) and (1,1) with inner control values `a` and `b`.
#[inline]
fn bezier(x: f32, a: f32, b: f32) -> f32 {
    3.0 * x * (1.0 - x) * ((1.0 - x) * a + x * b) + x * x * x
}

/// One sample of the normalised fling curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total distance travelled, 0.0 to 1.0.
    pub distance: f32,
    /// Slope of the distance curve at this point (normalised velocity).
    pub velocity: f32,
}

/// Samples the normalised fling curve at `progress` (0.0 to 1.0 of the duration).
pub fn sample_spline(progress: f32) -> SplineSample {
    let progress = progress.clamp(0.0, 1.0);
    let index = (SAMPLE_COUNT as f32 * progress) as usize;
    if index >= SAMPLE_COUNT {
        return SplineSample {
            distance: 1.0,
            velocity: 0.0,
        };
    }

    let t_low = index as f32 / SAMPLE_COUNT as f32;
    let t_high = (index + 1) as f32 / SAMPLE_COUNT as f32;
    let d_low = DISTANCE_TABLE[index];
    let d_high = DISTANCE_TABLE[index + 1];
    let velocity = (d_high - d_low) / (t_high - t_low);

    SplineSample {
        distance: d_low + (progress - t_low) * velocity,
        velocity,
    }
}

// ============================================================================
// Fling calculator
// ============================================================================

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter (for density conversion)
const INCHES_PER_METER: f32 = 39.37;
/// `|ln(0.78) / ln(0.9)|`, the scroller's deceleration exponent.
const DECELERATION_RATE: f64 = 2.358_201_6;

/// Physical deceleration for a display of the given density.
fn physical_coefficient(density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84
}

/// Distance and duration of a single fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCurve {
    /// Release velocity in px/sec; only its sign is used for direction.
    pub initial_velocity: f32,
    /// Total unsigned distance the fling covers.
    pub distance: f32,
    /// Total duration in milliseconds.
    pub duration_ms: i64,
}

impl FlingCurve {
    fn progress(&self, time_ms: i64) -> f32 {
        if self.duration_ms > 0 {
            time_ms as f32 / self.duration_ms as f32
        } else {
            1.0
        }
    }

    /// Signed displacement from the start position after `time_ms`.
    pub fn displacement(&self, time_ms: i64) -> f32 {
        self.distance * self.initial_velocity.signum() * sample_spline(self.progress(time_ms)).distance
    }

    /// Signed velocity in px/sec after `time_ms`.
    pub fn velocity(&self, time_ms: i64) -> f32 {
        if self.duration_ms <= 0 {
            return 0.0;
        }
        sample_spline(self.progress(time_ms)).velocity
            * self.initial_velocity.signum()
            * self.distance
            / self.duration_ms as f32
            * 1000.0
    }

    pub fn is_finished(&self, time_ms: i64) -> bool {
        time_ms >= self.duration_ms
    }
}

/// Turns a release velocity into a [`FlingCurve`] using scroller physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Platform scroll friction (`ViewConfiguration.getScrollFriction`).
    pub const DEFAULT_FRICTION: f32 = 0.015;

    /// `friction`: higher values stop the fling sooner.
    /// `density`: display density, 1.0 for mdpi.
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: physical_coefficient(density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn deceleration_log(&self, velocity: f32) -> f64 {
        let deceleration = (self.friction * self.physical_coefficient) as f64;
        (INFLECTION as f64 * velocity.abs() as f64 / deceleration).ln()
    }

    /// Duration in milliseconds of a fling released at `velocity`.
    pub fn duration_ms(&self, velocity: f32) -> i64 {
        let l = self.deceleration_log(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as i64
    }

    /// Unsigned distance covered by a fling released at `velocity`.
    pub fn distance(&self, velocity: f32) -> f32 {
        let l = self.deceleration_log(velocity);
        let scale = (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp();
        self.friction * self.physical_coefficient * scale as f32
    }

    pub fn curve(&self, velocity: f32) -> FlingCurve {
        FlingCurve {
            initial_velocity: velocity,
            distance: self.distance(velocity),
            duration_ms: self.duration_ms(velocity),
        }
    }
}

// ============================================================================
// Decay animation spec
// ============================================================================

/// A velocity-driven animation that decelerates to rest.
pub trait FloatDecayAnimationSpec {
    /// Speed below which the animation counts as finished.
    fn abs_velocity_threshold(&self) -> f32;

    fn value_at_nanos(&self, play_time_nanos: i64, initial_value: f32, initial_velocity: f32)
        -> f32;

    fn velocity_at_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32;

    fn duration_nanos(&self, initial_value: f32, initial_velocity: f32) -> i64;

    /// Where the animation comes to rest if nothing interrupts it.
    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32;
}

/// Spline-based decay matching the platform scroller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineBasedDecaySpec {
    calculator: FlingCalculator,
    velocity_threshold: f32,
}

impl SplineBasedDecaySpec {
    pub fn new(density: f32) -> Self {
        Self::with_calculator(FlingCalculator::with_density(density))
    }

    pub fn with_calculator(calculator: FlingCalculator) -> Self {
        Self {
            calculator,
            velocity_threshold: 0.0,
        }
    }

    /// Finishes the animation early once its speed drops below `threshold` px/sec.
    pub fn with_velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold.max(0.0);
        self
    }

    pub fn calculator(&self) -> FlingCalculator {
        self.calculator
    }
}

impl FloatDecayAnimationSpec for SplineBasedDecaySpec {
    fn abs_velocity_threshold(&self) -> f32 {
        self.velocity_threshold
    }

    fn value_at_nanos(
        &self,
        play_time_nanos: i64,
        initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let curve = self.calculator.curve(initial_velocity);
        initial_value + curve.displacement(play_time_nanos / 1_000_000)
    }

    fn velocity_at_nanos(
        &self,
        play_time_nanos: i64,
        _initial_value: f32,
        initial_velocity: f32,
    ) -> f32 {
        let curve = self.calculator.curve(initial_velocity);
        curve.velocity(play_time_nanos / 1_000_000)
    }

    fn duration_nanos(&self, _initial_value: f32, initial_velocity: f32) -> i64 {
        self.calculator.duration_ms(initial_velocity) * 1_000_000
    }

    fn target_value(&self, initial_value: f32, initial_velocity: f32) -> f32 {
        initial_value + self.calculator.distance(initial_velocity) * initial_velocity.signum()
    }
}
