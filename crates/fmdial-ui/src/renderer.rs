//! Turns a scroll offset into a [`DrawPlan`].
//!
//! Rendering is a pure function of the scale, the style, the offset and the
//! viewport. Coordinates are in viewport space: content is already shifted by
//! `-offset`, so the pointer stays at `W/2` while the ticks move.

use fmdial_foundation::TextMeasurer;
use fmdial_graphics::{Color, Point, Size};
use smallvec::{smallvec, SmallVec};

use crate::config::DialStyle;
use crate::scale::Scale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    TickLabel,
    Value,
    Unit,
}

/// A positioned single-line string. `origin` is the left end of the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub font_size: f32,
    pub color: Color,
    pub bold: bool,
    pub role: TextRole,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        color: Color,
        stroke_width: f32,
    },
    /// Closed, filled polygon.
    Polygon {
        points: SmallVec<[Point; 4]>,
        color: Color,
    },
    Text(TextRun),
}

/// Draw commands for one frame, in submission order, plus the value they show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawPlan {
    commands: Vec<DrawCommand>,
    current_mark: u32,
    current_value: f64,
}

impl DrawPlan {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn current_mark(&self) -> u32 {
        self.current_mark
    }

    /// Value under the pointer, rounded for display.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Line segments; the baseline first, then one per tick.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn text_with_role(&self, role: TextRole) -> Option<&TextRun> {
        self.texts().find(|run| run.role == role)
    }

    pub fn pointer(&self) -> Option<&[Point]> {
        self.commands.iter().find_map(|command| match command {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

/// Builds the frame for `offset` in a viewport of `viewport` size.
///
/// Returns an empty plan for a viewport that cannot be drawn into.
pub fn render(
    scale: &Scale,
    style: &DialStyle,
    offset: f32,
    viewport: Size,
    measurer: &dyn TextMeasurer,
) -> DrawPlan {
    if !viewport.is_drawable() || !offset.is_finite() {
        return DrawPlan::default();
    }

    let density = scale.density();
    let unit = scale.pixels_per_mark();
    let mark_count = scale.mark_count();
    let short_tick = style.short_tick_length.to_px(density);
    let long_tick = style.long_tick_length.to_px(density);
    let tick_label_size = style.tick_label_size.to_px(density);

    let baseline_y = viewport.height - unit;
    let center_x = viewport.width / 2.0;

    // baseline + ticks + a label per major tick + pointer + value + unit
    let majors = (mark_count / scale.config().major_tick_interval() + 1) as usize;
    let mut commands = Vec::with_capacity(mark_count as usize + majors + 5);

    commands.push(DrawCommand::Line {
        from: Point::new(scale.mark_position(0) - offset, baseline_y),
        to: Point::new(scale.mark_position(mark_count) - offset, baseline_y),
        color: style.mark_color,
        stroke_width: style.stroke_width,
    });

    for mark in 0..=mark_count {
        let x = scale.mark_position(mark) - offset;
        let major = scale.is_major(mark);
        let length = if major { long_tick } else { short_tick };
        commands.push(DrawCommand::Line {
            from: Point::new(x, baseline_y),
            to: Point::new(x, baseline_y - length),
            color: style.mark_color,
            stroke_width: style.stroke_width,
        });
        if major {
            let text = scale.format_tick_label(mark);
            let metrics = measurer.measure(&text, tick_label_size);
            commands.push(DrawCommand::Text(TextRun {
                text,
                origin: Point::new(
                    x - metrics.width / 2.0,
                    baseline_y - long_tick - metrics.height / 2.0,
                ),
                font_size: tick_label_size,
                color: style.mark_color,
                bold: false,
                role: TextRole::TickLabel,
            }));
        }
    }

    let pointer_top = baseline_y - 2.0 * long_tick;
    let half_width = style.pointer_half_width.to_px(density);
    commands.push(DrawCommand::Polygon {
        points: smallvec![
            Point::new(center_x, baseline_y),
            Point::new(center_x - half_width, pointer_top),
            Point::new(center_x + half_width, pointer_top),
        ],
        color: style.pointer_color,
    });

    let current_mark = scale.mark_from_offset(offset, viewport.width);
    let current_value = scale.round_value(scale.value_from_mark(current_mark));

    let value_size = style.value_label_size.to_px(density);
    let value_text = scale.format_value(current_value);
    let value_metrics = measurer.measure(&value_text, value_size);
    let value_baseline = pointer_top - value_metrics.height * 3.0 / 4.0;
    commands.push(DrawCommand::Text(TextRun {
        text: value_text,
        origin: Point::new(center_x - value_metrics.width / 2.0, value_baseline),
        font_size: value_size,
        color: style.pointer_color,
        bold: true,
        role: TextRole::Value,
    }));

    let unit_label = scale.config().unit_label();
    if !unit_label.is_empty() {
        commands.push(DrawCommand::Text(TextRun {
            text: unit_label.to_owned(),
            origin: Point::new(center_x + value_metrics.width * 3.0 / 4.0, value_baseline),
            font_size: style.unit_label_size.to_px(density),
            color: style.pointer_color,
            bold: false,
            role: TextRole::Unit,
        }));
    }

    DrawPlan {
        commands,
        current_mark,
        current_value,
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
