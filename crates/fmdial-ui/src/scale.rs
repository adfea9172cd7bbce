//! Scale model: conversions between scroll offset, mark index and value.
//!
//! Content space puts mark `i` at `x = (i + 1)·U`, leaving one empty mark of
//! padding at each end. The pointer sits at the horizontal centre of the
//! viewport, so the mark under it is derived from `offset + W/2`.

use fmdial_graphics::Density;

use crate::config::ScaleConfig;

/// A [`ScaleConfig`] resolved against a display density.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    config: ScaleConfig,
    density: Density,
    pixels_per_mark: f32,
}

impl Scale {
    pub fn new(config: ScaleConfig, density: Density) -> Self {
        let density = Density::new(density.factor());
        let pixels_per_mark = config.mark_spacing().to_px(density);
        Self {
            config,
            density,
            pixels_per_mark,
        }
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Distance between adjacent marks in pixels (`U`).
    pub fn pixels_per_mark(&self) -> f32 {
        self.pixels_per_mark
    }

    pub fn mark_count(&self) -> u32 {
        self.config.mark_count()
    }

    /// Content-space x of `mark`.
    pub fn mark_position(&self, mark: u32) -> f32 {
        (mark as f32 + 1.0) * self.pixels_per_mark
    }

    /// Total content length including the padding mark at each end.
    pub fn content_length(&self) -> f32 {
        (self.mark_count() as f32 + 2.0) * self.pixels_per_mark
    }

    pub fn is_major(&self, mark: u32) -> bool {
        mark % self.config.major_tick_interval() == 0
    }

    /// Mark under the pointer for a scroll `offset` in a viewport `viewport_width` wide.
    ///
    /// Rounds half up in pixel space: a remainder of exactly half a mark stays
    /// on the lower mark. The snap adjustment uses the same rule, so a settled
    /// dial always lands on the mark reported here.
    pub fn mark_from_offset(&self, offset: f32, viewport_width: f32) -> u32 {
        let content = offset + viewport_width / 2.0 - self.pixels_per_mark;
        if !content.is_finite() {
            return 0;
        }
        let whole = (content / self.pixels_per_mark).floor();
        let remainder = content - whole * self.pixels_per_mark;
        let mark = if remainder > self.pixels_per_mark / 2.0 {
            whole + 1.0
        } else {
            whole
        };
        mark.clamp(0.0, self.mark_count() as f32) as u32
    }

    pub fn value_from_mark(&self, mark: u32) -> f64 {
        self.config.base_value() + mark as f64 * self.config.value_per_mark()
    }

    /// Nearest mark for `value`, or `None` when it lies outside the scale.
    pub fn mark_from_value(&self, value: f64) -> Option<u32> {
        if !self.contains_value(value) {
            return None;
        }
        let steps = ((value - self.config.base_value()) / self.config.value_per_mark()).round();
        Some((steps.max(0.0) as u32).min(self.mark_count()))
    }

    pub fn offset_delta_for_mark(&self, target_mark: u32, current_mark: u32) -> f32 {
        (target_mark as f32 - current_mark as f32) * self.pixels_per_mark
    }

    /// Inclusive range check against the first and last mark values.
    pub fn contains_value(&self, value: f64) -> bool {
        // Absorbs the representation error of `base + count·step`.
        let slack = self.config.value_per_mark() * 1e-6;
        value >= self.config.base_value() - slack && value <= self.config.max_value() + slack
    }

    /// Rounds to the configured number of decimals.
    pub fn round_value(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.config.decimals() as i32);
        (value * factor).round() / factor
    }

    /// Current value label text, e.g. `"99.5"`.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.config.decimals(), self.round_value(value))
    }

    /// Integer part of the value at `mark`, used under major ticks.
    pub fn format_tick_label(&self, mark: u32) -> String {
        let value = self.round_value(self.value_from_mark(mark));
        format!("{}", value.trunc() as i64)
    }
}
