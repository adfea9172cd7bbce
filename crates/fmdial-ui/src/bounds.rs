//! Boundary clamping and snap-to-mark policy.

use crate::scale::Scale;

/// Valid scroll offsets for one viewport width.
///
/// `left` puts the first mark under the pointer, `right` the last one. Every
/// offset mutation goes through [`ScrollBounds::clamp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    pub left: f32,
    pub right: f32,
    pixels_per_mark: f32,
}

impl ScrollBounds {
    pub fn for_viewport(scale: &Scale, viewport_width: f32) -> Self {
        let half_width = viewport_width / 2.0;
        Self {
            left: scale.mark_position(0) - half_width,
            right: scale.mark_position(scale.mark_count()) - half_width,
            pixels_per_mark: scale.pixels_per_mark(),
        }
    }

    /// Pins `offset` to `[left, right]`. NaN collapses to `left`.
    pub fn clamp(&self, offset: f32) -> f32 {
        if offset > self.right {
            self.right
        } else if offset >= self.left {
            offset
        } else {
            self.left
        }
    }

    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.left && offset <= self.right
    }

    /// Offset that puts `mark` exactly under the pointer.
    pub fn offset_for_mark(&self, mark: u32) -> f32 {
        self.clamp(self.left + mark as f32 * self.pixels_per_mark)
    }

    /// Adjustment that aligns `offset` onto the nearest mark.
    ///
    /// Positive when the remainder past the previous mark exceeds half a mark
    /// (snap forward), otherwise zero or negative (snap back). The remainder
    /// is taken relative to `left`, which coincides with `offset mod U`
    /// whenever half the viewport width is a whole number of marks.
    pub fn snap_delta(&self, offset: f32) -> f32 {
        let remainder = (offset - self.left).rem_euclid(self.pixels_per_mark);
        if remainder > self.pixels_per_mark / 2.0 {
            self.pixels_per_mark - remainder
        } else {
            -remainder
        }
    }

    /// `offset + snap_delta(offset)` computed on the mark grid, then clamped.
    pub fn snapped(&self, offset: f32) -> f32 {
        let content = offset - self.left;
        let whole = (content / self.pixels_per_mark).floor();
        let remainder = content - whole * self.pixels_per_mark;
        let steps = if remainder > self.pixels_per_mark / 2.0 {
            whole + 1.0
        } else {
            whole
        };
        self.clamp(self.left + steps * self.pixels_per_mark)
    }
}
