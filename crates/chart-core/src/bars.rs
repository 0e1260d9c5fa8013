// File: crates/chart-core/src/bars.rs
// Summary: Bar marks keyed by category with a filter-driven re-render of heights and the value axis.

use crate::axis::Axis;
use crate::context::RenderContext;
use crate::geometry::{Point, Rect};
use crate::scale::{max_by, BandScale, LinearScale, Value};
use crate::scene::{Anchor, Baseline, DrawCommand, NodeId, TextStyle};
use crate::theme::Color;

pub const BAR_CLASS: &str = "bar";
const NO_DATA_CLASS: &str = "no-data";

#[derive(Clone, Debug, PartialEq)]
pub enum BarUpdate {
    /// Bars were re-laid out against a value domain of `[0, max]`.
    Updated { bars: usize, max: Value },
    /// The filter matched no rows; bars collapse and a "no data" label is shown.
    NoData,
}

/// One rect per band key; heights follow whatever subset of values was last applied.
#[derive(Clone, Debug)]
pub struct BarSeries {
    x: BandScale<String>,
    y: LinearScale,
    y_axis: Axis,
    bars: Vec<(String, NodeId)>,
    values: Vec<Option<Value>>,
}

impl BarSeries {
    /// Create zero-height bars for every key of `x`. Values arrive through [`BarSeries::set_values`].
    pub fn draw(ctx: &mut RenderContext, x: BandScale<String>, y: LinearScale, y_axis: Axis, fill: Color) -> Self {
        let h = ctx.plot_height();
        let width = x.bandwidth();
        let mut bars = Vec::with_capacity(x.len());
        for key in x.domain() {
            let left = x.position(key).unwrap_or(0.0);
            let id = ctx.scene.push_keyed(
                BAR_CLASS,
                key.clone(),
                DrawCommand::Rect { rect: Rect::from_xywh(left, h, width, 0.0), fill: Some(fill), stroke: None },
            );
            bars.push((key.clone(), id));
        }
        let values = vec![None; bars.len()];
        Self { x, y, y_axis, bars, values }
    }

    /// Apply the records matching `keep`: rebuild the value scale over that subset,
    /// resize every bar, and redraw the value axis. Calling it twice with the same
    /// filter yields the same geometry.
    pub fn update<T>(
        &mut self,
        ctx: &mut RenderContext,
        data: &[T],
        keep: impl Fn(&T) -> bool,
        key: impl Fn(&T) -> &str,
        value: impl Fn(&T) -> Value,
    ) -> BarUpdate {
        let subset: Vec<(String, Value)> =
            data.iter().filter(|d| keep(*d)).map(|d| (key(d).to_string(), value(d))).collect();
        self.set_values(ctx, &subset)
    }

    pub fn set_values(&mut self, ctx: &mut RenderContext, values: &[(String, Value)]) -> BarUpdate {
        ctx.scene.remove_class(NO_DATA_CLASS);
        let h = ctx.plot_height();

        let Some(max) = max_by(values, |(_, v)| *v) else {
            tracing::warn!("bar filter matched no rows");
            for (i, (_, id)) in self.bars.iter().enumerate() {
                self.values[i] = None;
                set_bar(ctx, *id, h, h);
            }
            self.y.set_domain(0.0, 1.0);
            self.y_axis.redraw(ctx, &self.y);
            let style = TextStyle::new(ctx.theme.message, 14.0).anchor(Anchor::Middle).baseline(Baseline::Middle);
            let at = Point::new(ctx.plot_width() * 0.5, h * 0.5);
            ctx.scene.push_classed(NO_DATA_CLASS, DrawCommand::Text { text: "No data".to_string(), at, style });
            return BarUpdate::NoData;
        };

        self.y.set_domain(0.0, max);
        for (i, (k, id)) in self.bars.iter().enumerate() {
            let v = values.iter().find(|(vk, _)| vk == k).map(|(_, v)| *v);
            self.values[i] = v;
            match v {
                Some(v) => set_bar(ctx, *id, self.y.to_px(v), h),
                None => {
                    tracing::warn!(key = %k, "no value for bar in current filter");
                    set_bar(ctx, *id, h, h);
                }
            }
        }
        for (k, _) in values {
            if !self.x.contains(k) {
                tracing::warn!(key = %k, "value key outside bar domain; skipped");
            }
        }
        self.y_axis.redraw(ctx, &self.y);
        BarUpdate::Updated { bars: self.values.iter().filter(|v| v.is_some()).count(), max }
    }

    /// Value currently shown by the bar for `key`.
    pub fn value_of(&self, key: &str) -> Option<Value> {
        self.bars.iter().position(|(k, _)| k == key).and_then(|i| self.values[i])
    }

    pub fn node_of(&self, key: &str) -> Option<NodeId> {
        self.bars.iter().find(|(k, _)| k == key).map(|(_, id)| *id)
    }

    /// Current rect of every bar in domain order.
    pub fn rects(&self, ctx: &RenderContext) -> Vec<Rect> {
        self.bars
            .iter()
            .filter_map(|(_, id)| match ctx.scene.get(*id).map(|n| &n.cmd) {
                Some(DrawCommand::Rect { rect, .. }) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn x(&self) -> &BandScale<String> { &self.x }
    pub fn y(&self) -> &LinearScale { &self.y }
}

/// Move a bar's top to `top`, keeping its bottom on the baseline `h`.
fn set_bar(ctx: &mut RenderContext, id: NodeId, top: f32, h: f32) {
    if let Some(node) = ctx.scene.get_mut(id) {
        if let DrawCommand::Rect { rect, .. } = &mut node.cmd {
            rect.top = top.min(h);
            rect.bottom = h;
        }
    }
}
