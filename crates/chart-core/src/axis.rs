// File: crates/chart-core/src/axis.rs
// Summary: Axis renderer: domain line, tick marks, tick labels and an optional title.

use crate::context::RenderContext;
use crate::geometry::Point;
use crate::scale::AxisScale;
use crate::scene::{Anchor, Baseline, DrawCommand, NodeId, Stroke, TextStyle};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Left,
}

#[derive(Clone, Debug)]
pub struct AxisTitle {
    pub text: String,
    /// Distance from the axis line to the title, in pixels.
    pub offset: f32,
    pub font_size: f32,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub edge: Edge,
    pub color: Color,
    pub stroke_width: f32,
    pub tick_size: f32,
    pub tick_padding: f32,
    pub font_size: f32,
    pub title: Option<AxisTitle>,
}

impl Axis {
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            color: Color::BLACK,
            stroke_width: 1.0,
            tick_size: 6.0,
            tick_padding: 3.0,
            font_size: 10.0,
            title: None,
        }
    }

    pub fn bottom() -> Self { Self::new(Edge::Bottom) }
    pub fn left() -> Self { Self::new(Edge::Left) }

    /// Override the domain/tick stroke.
    pub fn with_stroke(mut self, width: f32, color: Color) -> Self {
        self.stroke_width = width;
        self.color = color;
        self
    }

    pub fn with_title(mut self, text: impl Into<String>, offset: f32) -> Self {
        self.title = Some(AxisTitle { text: text.into(), offset, font_size: 14.0 });
        self
    }

    /// Class applied to every node of this axis, so it can be redrawn as a unit.
    pub fn class(&self) -> &'static str {
        match self.edge {
            Edge::Bottom => "x-axis",
            Edge::Left => "y-axis",
        }
    }

    pub fn draw<S: AxisScale>(&self, ctx: &mut RenderContext, scale: &S) -> Vec<NodeId> {
        let class = self.class();
        let h = ctx.plot_height();
        let w = ctx.plot_width();
        let (r0, r1) = scale.range();
        let stroke = Stroke::solid(self.color, self.stroke_width);
        let outer = self.tick_size;
        let label_gap = self.tick_size + self.tick_padding;
        let mut ids = Vec::new();

        let domain = match self.edge {
            Edge::Bottom => vec![
                Point::new(r0, h + outer),
                Point::new(r0, h),
                Point::new(r1, h),
                Point::new(r1, h + outer),
            ],
            Edge::Left => vec![
                Point::new(-outer, r0),
                Point::new(0.0, r0),
                Point::new(0.0, r1),
                Point::new(-outer, r1),
            ],
        };
        ids.push(ctx.scene.push_classed(class, DrawCommand::Path { points: domain, stroke: stroke.clone() }));

        let label_style = TextStyle::new(ctx.theme.tick_label, self.font_size);
        for tick in scale.ticks() {
            let (from, to, at, style) = match self.edge {
                Edge::Bottom => (
                    Point::new(tick.px, h),
                    Point::new(tick.px, h + self.tick_size),
                    Point::new(tick.px, h + label_gap),
                    label_style.clone().anchor(Anchor::Middle).baseline(Baseline::Hanging),
                ),
                Edge::Left => (
                    Point::new(0.0, tick.px),
                    Point::new(-self.tick_size, tick.px),
                    Point::new(-label_gap, tick.px),
                    label_style.clone().anchor(Anchor::End).baseline(Baseline::Middle),
                ),
            };
            ids.push(ctx.scene.push_classed(class, DrawCommand::Line { from, to, stroke: stroke.clone() }));
            ids.push(ctx.scene.push_classed(class, DrawCommand::Text { text: tick.label, at, style }));
        }

        if let Some(title) = &self.title {
            let base = TextStyle::new(ctx.theme.title, title.font_size).anchor(Anchor::Middle);
            let (at, style) = match self.edge {
                Edge::Bottom => (Point::new(w * 0.5, h + title.offset), base),
                // Rotated frame: x runs up the plot, y points left of the axis.
                Edge::Left => (Point::new(-h * 0.5, -title.offset), base.rotated(-90.0)),
            };
            ids.push(ctx.scene.push_classed(class, DrawCommand::Text { text: title.text.clone(), at, style }));
        }
        ids
    }

    /// Remove this axis' previous nodes and draw it again against `scale`.
    pub fn redraw<S: AxisScale>(&self, ctx: &mut RenderContext, scale: &S) -> Vec<NodeId> {
        ctx.scene.remove_class(self.class());
        self.draw(ctx, scale)
    }
}
