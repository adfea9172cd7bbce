//! Scroll offset holder.
//!
//! All writes go through [`ScrollState::dispatch_raw_delta`] or
//! [`ScrollState::scroll_to`], both of which clamp against the current
//! [`ScrollBounds`].

use crate::bounds::ScrollBounds;

/// Deltas smaller than this are not worth a state change.
const MIN_DELTA: f32 = 0.001;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    bounds: Option<ScrollBounds>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn bounds(&self) -> Option<ScrollBounds> {
        self.bounds
    }

    /// Installs new bounds and re-clamps the current offset against them.
    pub fn set_bounds(&mut self, bounds: ScrollBounds) {
        self.bounds = Some(bounds);
        self.offset = bounds.clamp(self.offset);
    }

    /// Scrolls by `delta`, clamping to the bounds. Returns the amount actually moved.
    ///
    /// Without bounds nothing moves.
    pub fn dispatch_raw_delta(&mut self, delta: f32) -> f32 {
        let Some(bounds) = self.bounds else {
            return 0.0;
        };
        if !delta.is_finite() {
            return 0.0;
        }
        let current = self.offset;
        let target = bounds.clamp(current + delta);
        let consumed = target - current;
        if consumed.abs() > MIN_DELTA || target == bounds.left || target == bounds.right {
            self.offset = target;
            consumed
        } else {
            0.0
        }
    }

    /// Jumps to `position`, clamped. Returns the amount moved.
    pub fn scroll_to(&mut self, position: f32) -> f32 {
        let Some(bounds) = self.bounds else {
            return 0.0;
        };
        let previous = self.offset;
        self.offset = bounds.clamp(position);
        self.offset - previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleConfig;
    use crate::scale::Scale;
    use fmdial_graphics::Density;

    fn state() -> ScrollState {
        let scale = Scale::new(ScaleConfig::fm_broadcast(), Density::ONE);
        let mut state = ScrollState::new();
        state.set_bounds(ScrollBounds::for_viewport(&scale, 300.0));
        state
    }

    #[test]
    fn set_bounds_clamps_existing_offset() {
        let mut state = state();
        state.scroll_to(1_000.0);

        let scale = Scale::new(ScaleConfig::fm_broadcast(), Density::ONE);
        state.set_bounds(ScrollBounds::for_viewport(&scale, 600.0));
        assert_eq!(state.offset(), 966.0);
    }

    #[test]
    fn nothing_moves_without_bounds() {
        let mut state = ScrollState::new();
        assert_eq!(state.dispatch_raw_delta(50.0), 0.0);
        assert_eq!(state.scroll_to(50.0), 0.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn dispatch_returns_consumed_amount() {
        let mut state = state();
        assert_eq!(state.dispatch_raw_delta(-100.0), -100.0);
        assert_eq!(state.dispatch_raw_delta(-100.0), -44.0);
        assert_eq!(state.offset(), -144.0);
        assert_eq!(state.dispatch_raw_delta(-1.0), 0.0);
    }

    #[test]
    fn huge_drag_pins_to_left_border() {
        let mut state = state();
        state.dispatch_raw_delta(-5_000.0);
        assert_eq!(state.offset(), -144.0);
        state.dispatch_raw_delta(f32::NAN);
        assert_eq!(state.offset(), -144.0);
    }

    #[test]
    fn scroll_to_clamps() {
        let mut state = state();
        assert_eq!(state.scroll_to(2_000.0), 1116.0);
        assert_eq!(state.offset(), 1116.0);
    }
}
