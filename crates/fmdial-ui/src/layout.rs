//! Size negotiation with the host layout.

use fmdial_graphics::Size;

use crate::config::DialStyle;
use crate::scale::Scale;

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    pub fn unbounded() -> Self {
        Self::loose(f32::INFINITY, f32::INFINITY)
    }

    /// Exact width, height left to the dial up to `max_height`.
    pub fn fixed_width(width: f32, max_height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: 0.0,
            max_height,
        }
    }

    #[inline]
    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    #[inline]
    pub fn has_tight_height(&self) -> bool {
        self.min_height == self.max_height
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Fits `width` and `height` inside these constraints. Never panics on
    /// inverted or NaN bounds; the maximum wins.
    pub fn constrain(&self, width: f32, height: f32) -> (f32, f32) {
        (
            width.max(self.min_width).min(self.max_width),
            height.max(self.min_height).min(self.max_height),
        )
    }
}

/// Size the dial asks for under `constraints`.
///
/// Width takes whatever the host offers, falling back to the full content
/// length when unbounded. Height is exact when the host is tight and the
/// intrinsic height otherwise.
pub fn measure(scale: &Scale, style: &DialStyle, constraints: Constraints) -> Size {
    let width = if constraints.has_tight_width() || constraints.has_bounded_width() {
        constraints.max_width
    } else {
        scale.content_length()
    };
    let height = if constraints.has_tight_height() {
        constraints.max_height
    } else {
        style.intrinsic_height.to_px(scale.density())
    };
    let (width, height) = constraints.constrain(width, height);
    Size::new(width.max(0.0), height.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleConfig;
    use fmdial_graphics::Density;

    fn scale(density: f32) -> Scale {
        Scale::new(ScaleConfig::fm_broadcast(), Density::new(density))
    }

    #[test]
    fn tight_constraints_are_honoured() {
        let size = measure(&scale(1.0), &DialStyle::default(), Constraints::tight(300.0, 80.0));
        assert_eq!(size, Size::new(300.0, 80.0));
    }

    #[test]
    fn flexible_height_uses_intrinsic_height() {
        let size = measure(&scale(2.0), &DialStyle::default(), Constraints::loose(400.0, 1000.0));
        assert_eq!(size, Size::new(400.0, 240.0));
    }

    #[test]
    fn intrinsic_height_is_capped_by_host() {
        let size = measure(
            &scale(1.0),
            &DialStyle::default(),
            Constraints::fixed_width(320.0, 100.0),
        );
        assert_eq!(size, Size::new(320.0, 100.0));
    }

    #[test]
    fn unbounded_width_wraps_content() {
        let size = measure(&scale(1.0), &DialStyle::default(), Constraints::unbounded());
        assert_eq!(size, Size::new(1272.0, 120.0));
    }

    #[test]
    fn constrain_tolerates_inverted_bounds() {
        let constraints = Constraints {
            min_width: 10.0,
            max_width: 5.0,
            min_height: 0.0,
            max_height: f32::NAN,
        };
        let (width, height) = constraints.constrain(7.0, 3.0);
        assert_eq!(width, 5.0);
        assert_eq!(height, 3.0);
    }
}
