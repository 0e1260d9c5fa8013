// File: crates/chart-core/src/legend.rs
// Summary: Horizontal legend of color swatches and labels centered under the plot.

use crate::context::RenderContext;
use crate::geometry::{Point, Rect};
use crate::scene::{Baseline, DrawCommand, TextStyle};
use crate::theme::Color;

#[derive(Clone, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self { label: label.into(), color }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LegendLayout {
    pub swatch_width: f32,
    pub swatch_height: f32,
    /// Gap between one entry's swatch end and the next entry's swatch start.
    pub spacing: f32,
    pub font_size: f32,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self { swatch_width: 80.0, swatch_height: 12.0, spacing: 110.0, font_size: 12.0 }
    }
}

/// Lay the entries out in a row at plot-local `y`, centered horizontally.
pub fn draw_legend(ctx: &mut RenderContext, entries: &[LegendEntry], y: f32, layout: LegendLayout) {
    if entries.is_empty() {
        return;
    }
    let n = entries.len() as f32;
    let total = n * layout.swatch_width + (n - 1.0) * layout.spacing;
    let start = (ctx.plot_width() - total) * 0.5;
    let label_color = ctx.theme.title;
    for (i, e) in entries.iter().enumerate() {
        let x = start + i as f32 * (layout.swatch_width + layout.spacing);
        ctx.scene.push_classed(
            "legend",
            DrawCommand::Rect {
                rect: Rect::from_xywh(x, y, layout.swatch_width, layout.swatch_height),
                fill: Some(e.color),
                stroke: None,
            },
        );
        let style = TextStyle::new(label_color, layout.font_size).baseline(Baseline::Middle);
        ctx.scene.push_classed(
            "legend",
            DrawCommand::Text {
                text: e.label.clone(),
                at: Point::new(x + layout.swatch_width + 5.0, y + layout.swatch_height * 0.5),
                style,
            },
        );
    }
}
