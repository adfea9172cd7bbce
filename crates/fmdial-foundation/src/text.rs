//! Text measurement contract.
//!
//! Glyph shaping belongs to the rendering surface. The dial only needs the
//! bounds of a string at a given size to centre its labels.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

pub trait TextMeasurer {
    /// Measures the ink bounds of a single line of `text` at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Fallback measurer that treats every glyph as the same width.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    /// Glyph advance as a fraction of the font size.
    const CHAR_WIDTH_RATIO: f32 = 0.6;
    /// Digit cap height as a fraction of the font size.
    const CAP_HEIGHT_RATIO: f32 = 0.7;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let size = font_size.max(0.0);
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return TextMetrics::default();
        }
        TextMetrics {
            width: glyphs as f32 * size * Self::CHAR_WIDTH_RATIO,
            height: size * Self::CAP_HEIGHT_RATIO,
        }
    }
}
