//! Character-cell rendering surface.
//!
//! Rasterises a [`DrawPlan`] into a few lines of text, one column per
//! `cell_width` pixels. Enough to watch the scale move in a terminal.

use fmdial_ui::{DrawCommand, DrawPlan, TextRole};

pub struct TextStrip {
    columns: usize,
    cell_width: f32,
}

impl TextStrip {
    pub fn new(viewport_width: f32, cell_width: f32) -> Self {
        let cell_width = if cell_width > 0.0 { cell_width } else { 1.0 };
        Self {
            columns: (viewport_width / cell_width).ceil().max(1.0) as usize,
            cell_width,
        }
    }

    fn column(&self, x: f32) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let column = (x / self.cell_width) as usize;
        (column < self.columns).then_some(column)
    }

    /// Value header, tick row with the pointer and a label row.
    pub fn draw(&self, plan: &DrawPlan) -> String {
        let mut ticks = vec![' '; self.columns];
        let mut labels = vec![' '; self.columns];

        for command in plan.commands() {
            match command {
                DrawCommand::Line { from, to, .. } if from.x == to.x => {
                    if let Some(column) = self.column(from.x) {
                        let long = (from.y - to.y).abs() > 20.0;
                        ticks[column] = if long { '|' } else { '\'' };
                    }
                }
                DrawCommand::Polygon { points, .. } => {
                    if let Some(column) = points.first().and_then(|tip| self.column(tip.x)) {
                        ticks[column] = 'v';
                    }
                }
                DrawCommand::Text(run) if run.role == TextRole::TickLabel => {
                    if let Some(start) = self.column(run.origin.x) {
                        for (slot, ch) in labels[start..].iter_mut().zip(run.text.chars()) {
                            *slot = ch;
                        }
                    }
                }
                _ => {}
            }
        }

        let header = match (
            plan.text_with_role(TextRole::Value),
            plan.text_with_role(TextRole::Unit),
        ) {
            (Some(value), Some(unit)) => format!("{} {}", value.text, unit.text),
            (Some(value), None) => value.text.clone(),
            _ => String::new(),
        };
        let pad = self.columns.saturating_sub(header.len()) / 2;

        format!(
            "{:pad$}{header}\n{}\n{}",
            "",
            ticks.into_iter().collect::<String>(),
            labels.into_iter().collect::<String>(),
        )
    }
}
