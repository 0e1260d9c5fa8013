// File: crates/chart-core/src/tooltip.rs
// Summary: Two-state (hidden/shown) hover tooltip controller, independent of event dispatch.

use crate::context::RenderContext;
use crate::geometry::{Point, Rect};
use crate::scene::{Anchor, DrawCommand, NodeId, Stroke, TextStyle};

pub const TOOLTIP_CLASS: &str = "tooltip";

/// Where the transient label goes relative to the hover position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Bare text `lift` pixels above a mark's data position.
    AboveMark { lift: f32, font_size: f32 },
    /// Boxed label centered above the pointer.
    PointerBox { width: f32, height: f32, lift: f32, font_size: f32 },
}

impl Placement {
    pub fn above_mark() -> Self {
        Placement::AboveMark { lift: 10.0, font_size: 15.0 }
    }

    pub fn pointer_box() -> Self {
        Placement::PointerBox { width: 100.0, height: 35.0, lift: 50.0, font_size: 14.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TooltipState {
    Hidden,
    Shown { at: Point, text: String, nodes: Vec<NodeId> },
}

#[derive(Clone, Debug)]
pub struct Tooltip {
    class: String,
    placement: Placement,
    state: TooltipState,
}

impl Tooltip {
    pub fn new(class: impl Into<String>, placement: Placement) -> Self {
        Self { class: class.into(), placement, state: TooltipState::Hidden }
    }

    pub fn above_mark() -> Self {
        Self::new(TOOLTIP_CLASS, Placement::above_mark())
    }

    pub fn pointer_box() -> Self {
        Self::new(TOOLTIP_CLASS, Placement::pointer_box())
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, TooltipState::Shown { .. })
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Pointer entered a mark: show `text` at plot-local `at`.
    ///
    /// Any tooltip already in the scene under this class is removed first, so repeated
    /// enters without a leave never stack labels.
    pub fn enter(&mut self, ctx: &mut RenderContext, at: Point, text: impl Into<String>) {
        ctx.scene.remove_class(&self.class);
        let text = text.into();
        let color = ctx.theme.tooltip_text;
        let nodes = match self.placement {
            Placement::AboveMark { lift, font_size } => {
                let style = TextStyle::new(color, font_size).bold().anchor(Anchor::Middle);
                vec![ctx.scene.push_classed(
                    &self.class,
                    DrawCommand::Text { text: text.clone(), at: at.offset(0.0, -lift), style },
                )]
            }
            Placement::PointerBox { width, height, lift, font_size } => {
                let left = at.x - width * 0.5;
                let top = at.y - lift;
                let frame = ctx.scene.push_classed(
                    &self.class,
                    DrawCommand::Rect {
                        rect: Rect::from_xywh(left, top, width, height),
                        fill: Some(ctx.theme.tooltip_fill),
                        stroke: Some(Stroke::solid(ctx.theme.tooltip_border, 1.0)),
                    },
                );
                let style = TextStyle::new(color, font_size).bold().anchor(Anchor::Middle);
                let label = ctx.scene.push_classed(
                    &self.class,
                    DrawCommand::Text { text: text.clone(), at: Point::new(at.x, top + 20.0), style },
                );
                vec![frame, label]
            }
        };
        tracing::debug!(class = %self.class, %text, "tooltip shown");
        self.state = TooltipState::Shown { at, text, nodes };
    }

    /// Same as [`Tooltip::enter`] for a canvas-space pointer position.
    pub fn enter_at_pointer(&mut self, ctx: &mut RenderContext, canvas: Point, text: impl Into<String>) {
        let (x, y) = ctx.frame.to_plot(canvas.x, canvas.y);
        self.enter(ctx, Point::new(x, y), text);
    }

    /// Pointer left the mark: remove the label. Leaving while hidden is a no-op.
    pub fn leave(&mut self, ctx: &mut RenderContext) {
        ctx.scene.remove_class(&self.class);
        self.state = TooltipState::Hidden;
    }
}
