//! Unit types: Dp, Density, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.0
    }
}

/// Display density: physical pixels per density-independent pixel.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(pub f32);

impl Density {
    /// Baseline (mdpi) density.
    pub const ONE: Density = Density(1.0);

    /// Falls back to [`Density::ONE`] for non-finite or non-positive factors.
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::ONE
        }
    }

    pub fn factor(&self) -> f32 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}
