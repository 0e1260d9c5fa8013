// File: crates/chart-core/src/chart.rs
// Summary: Chart scaffold shared by every chart: frame, render context and the x/y scale pair.

use crate::axis::Axis;
use crate::context::RenderContext;
use crate::error::{ChartError, Result};
use crate::scale::{AxisScale, BandScale, LinearScale, Value};
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::Frame;

/// Layout inputs of a chart.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub frame: Frame,
    pub theme: Theme,
    /// Fraction of each band slot left as gutter.
    pub padding_inner: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { frame: Frame::default(), theme: Theme::light(), padding_inner: 0.1 }
    }
}

/// Render context plus the band (x) and linear (y) scales spanning its plot area.
pub struct Chart<K> {
    pub ctx: RenderContext,
    pub x: BandScale<K>,
    pub y: LinearScale,
}

impl<K: PartialEq + Clone> Chart<K> {
    /// Build the scaffold for `keys` along x and a `[0, y_max]` value domain.
    ///
    /// An empty key set is reported as `EmptyDataset` naming `what`.
    pub fn new(opts: &RenderOptions, what: &str, keys: impl IntoIterator<Item = K>, y_max: Value) -> Result<Self> {
        let ctx = RenderContext::new(opts.frame, opts.theme);
        let x = match BandScale::new(keys, 0.0, ctx.plot_width(), opts.padding_inner) {
            Ok(x) => x,
            Err(ChartError::EmptyDomain) => return Err(ChartError::empty(what)),
            Err(e) => return Err(e),
        };
        let y = LinearScale::zero_based(y_max, ctx.plot_height());
        tracing::debug!(chart = what, slots = x.len(), y_max, "chart scaffold");
        Ok(Self { ctx, x, y })
    }

    pub fn into_scene(self) -> Scene {
        self.ctx.into_scene()
    }
}

impl<K> Chart<K>
where
    BandScale<K>: AxisScale,
{
    pub fn draw_axes(&mut self, x_axis: &Axis, y_axis: &Axis) {
        x_axis.draw(&mut self.ctx, &self.x);
        y_axis.draw(&mut self.ctx, &self.y);
    }
}

/// Scene shown in place of a chart whose dataset is empty.
pub fn no_data_scene(opts: &RenderOptions, what: &str) -> Scene {
    tracing::warn!(chart = what, "no rows to plot");
    Scene::message(&opts.frame, opts.theme.background, opts.theme.message, format!("No data: {what}"))
}

/// Scene shown in place of a chart whose data could not be loaded.
pub fn error_scene(opts: &RenderOptions, err: &dyn std::fmt::Display) -> Scene {
    Scene::message(&opts.frame, opts.theme.background, opts.theme.tooltip_text, format!("Failed to render chart: {err}"))
}
