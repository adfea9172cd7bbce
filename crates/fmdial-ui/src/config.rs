//! Construction-time configuration for a dial instance.
//!
//! Everything here is plain data with `Default` impls for the FM broadcast
//! band, so a host can override one field and keep the rest.

use std::fmt;

use fmdial_foundation::gesture_constants::{
    FLING_STOP_VELOCITY, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, VELOCITY_HORIZON_MS,
};
use fmdial_animation::FlingCalculator;
use fmdial_graphics::{Color, Density, Dp};

/// Why a [`ScaleConfig`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleConfigError {
    /// Mark spacing must be strictly positive.
    NonPositiveSpacing(f32),
    /// Value step per mark must be strictly positive.
    NonPositiveStep(f64),
    /// A major tick every zero marks is meaningless.
    ZeroMajorInterval,
    /// Base value or step was NaN or infinite.
    NonFiniteValue,
}

impl fmt::Display for ScaleConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleConfigError::NonPositiveSpacing(spacing) => {
                write!(f, "mark spacing must be positive, got {spacing}dp")
            }
            ScaleConfigError::NonPositiveStep(step) => {
                write!(f, "value per mark must be positive, got {step}")
            }
            ScaleConfigError::ZeroMajorInterval => write!(f, "major tick interval must be non-zero"),
            ScaleConfigError::NonFiniteValue => write!(f, "scale values must be finite"),
        }
    }
}

impl std::error::Error for ScaleConfigError {}

/// Immutable description of an evenly spaced value scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleConfig {
    mark_count: u32,
    value_per_mark: f64,
    base_value: f64,
    mark_spacing: Dp,
    major_tick_interval: u32,
    decimals: usize,
    unit_label: String,
}

impl ScaleConfig {
    pub fn new(
        mark_count: u32,
        value_per_mark: f64,
        base_value: f64,
        mark_spacing: Dp,
        major_tick_interval: u32,
    ) -> Result<Self, ScaleConfigError> {
        if !value_per_mark.is_finite() || !base_value.is_finite() || !mark_spacing.0.is_finite() {
            return Err(ScaleConfigError::NonFiniteValue);
        }
        if mark_spacing.0 <= 0.0 {
            return Err(ScaleConfigError::NonPositiveSpacing(mark_spacing.0));
        }
        if value_per_mark <= 0.0 {
            return Err(ScaleConfigError::NonPositiveStep(value_per_mark));
        }
        if major_tick_interval == 0 {
            return Err(ScaleConfigError::ZeroMajorInterval);
        }
        Ok(Self {
            mark_count,
            value_per_mark,
            base_value,
            mark_spacing,
            major_tick_interval,
            decimals: 1,
            unit_label: String::new(),
        })
    }

    /// 87.0 to 108.0 MHz in 0.1 MHz steps, 6dp apart, labelled every 1 MHz.
    pub fn fm_broadcast() -> Self {
        Self {
            mark_count: 210,
            value_per_mark: 0.1,
            base_value: 87.0,
            mark_spacing: Dp(6.0),
            major_tick_interval: 10,
            decimals: 1,
            unit_label: "MHz".to_string(),
        }
    }

    /// Number of decimals shown in the current value label.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_unit_label(mut self, unit_label: impl Into<String>) -> Self {
        self.unit_label = unit_label.into();
        self
    }

    pub fn mark_count(&self) -> u32 {
        self.mark_count
    }

    pub fn value_per_mark(&self) -> f64 {
        self.value_per_mark
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Value of the last mark.
    pub fn max_value(&self) -> f64 {
        self.base_value + self.mark_count as f64 * self.value_per_mark
    }

    pub fn mark_spacing(&self) -> Dp {
        self.mark_spacing
    }

    pub fn major_tick_interval(&self) -> u32 {
        self.major_tick_interval
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self::fm_broadcast()
    }
}

/// Cosmetic settings. None of these affect geometry of the scale itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialStyle {
    pub mark_color: Color,
    pub pointer_color: Color,
    /// Stroke width of ticks and baseline, in pixels.
    pub stroke_width: f32,
    pub short_tick_length: Dp,
    pub long_tick_length: Dp,
    pub pointer_half_width: Dp,
    pub tick_label_size: Dp,
    pub value_label_size: Dp,
    pub unit_label_size: Dp,
    /// Height requested when the host leaves the height flexible.
    pub intrinsic_height: Dp,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            mark_color: Color::from_argb(0xFF00_0000),
            pointer_color: Color::from_argb(0xFFF1_0404),
            stroke_width: 3.0,
            short_tick_length: Dp(16.0),
            long_tick_length: Dp(32.0),
            pointer_half_width: Dp(3.0),
            tick_label_size: Dp(22.0),
            value_label_size: Dp(25.0),
            unit_label_size: Dp(12.0),
            intrinsic_height: Dp(120.0),
        }
    }
}

/// Drag and fling tuning, in pixels and pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Release speed above which the dial keeps moving on its own.
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    /// A fling slower than this is at rest.
    pub fling_stop_velocity: f32,
    /// Only motion this recent contributes to the release velocity.
    pub velocity_horizon_ms: i64,
    pub friction: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            fling_stop_velocity: FLING_STOP_VELOCITY,
            velocity_horizon_ms: VELOCITY_HORIZON_MS,
            friction: FlingCalculator::DEFAULT_FRICTION,
        }
    }
}

/// Everything needed to build a [`crate::FrequencyDial`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialConfig {
    pub scale: ScaleConfig,
    pub style: DialStyle,
    pub gestures: GestureConfig,
    pub density: Density,
}

impl DialConfig {
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }
}
