// File: crates/demo/src/charts/inventory.rs
// Summary: Domestic consumption vs. supply (million barrels per day) with projected years,
// a legend and event annotations on the consumption line.

use super::{hover_year, Rendered};
use crate::config::InventoryConfig;
use chart_core::chart::{error_scene, no_data_scene};
use chart_core::scale::max_by;
use chart_core::{
    draw_annotations, draw_legend, draw_yearly_series, AnnotationLayout, Axis, Chart, Color, Inventory, LegendEntry,
    LegendLayout, SeriesStyle,
};

pub const NAME: &str = "inventory";

pub fn render(cfg: &InventoryConfig, data: &[Inventory], hover: Option<&str>) -> Rendered {
    let opts = cfg.canvas.render_options();
    let Some(y_max) = max_by(data, |d| d.consumed.max(d.gas_supply)) else {
        return Rendered::new(NAME, no_data_scene(&opts, NAME));
    };
    let mut chart = match Chart::new(&opts, NAME, data.iter().map(|d| d.year), y_max) {
        Ok(chart) => chart,
        Err(err) => return Rendered::new(NAME, error_scene(&opts, &err)),
    };
    let (x, y) = (chart.x.clone(), chart.y);
    let cutoff = cfg.projection_cutoff;

    let consumed = SeriesStyle::new("consumed", Color::GREEN, Color::DARK_GREEN);
    let supply = SeriesStyle::new("gas_supply", Color::BROWN, Color::BROWN);
    draw_yearly_series(&mut chart.ctx, &x, &y, data, cutoff, |d| d.consumed, &consumed);
    draw_yearly_series(&mut chart.ctx, &x, &y, data, cutoff, |d| d.gas_supply, &supply);

    chart.draw_axes(
        &Axis::bottom().with_stroke(2.0, Color::BLACK).with_title("Year", 40.0),
        &Axis::left().with_stroke(2.0, Color::BLACK).with_title("Million barrels per day", 50.0),
    );

    let legend_y = chart.ctx.plot_height() + 60.0;
    draw_legend(
        &mut chart.ctx,
        &[LegendEntry::new("Domestic Supply", Color::BROWN), LegendEntry::new("Domestic Consumption", Color::GREEN)],
        legend_y,
        LegendLayout::default(),
    );

    let report =
        draw_annotations(&mut chart.ctx, &x, &y, data, &cfg.annotations, |d| d.consumed, AnnotationLayout::default());
    if !report.is_complete() {
        tracing::warn!(missed = report.missed.len(), drawn = report.drawn.len(), "some annotations were skipped");
    }

    if let Some(key) = hover {
        let mmbpd = |v: f64| format!("{v} MMbpd");
        match key.split_once(':').unwrap_or(("consumed", key)) {
            ("consumed", year) => {
                hover_year(&mut chart.ctx, &x, &y, data, year, |d| d.consumed, mmbpd);
            }
            ("gas_supply", year) => {
                hover_year(&mut chart.ctx, &x, &y, data, year, |d| d.gas_supply, mmbpd);
            }
            (series, _) => tracing::warn!(series, "unknown hover series"),
        }
    }
    Rendered::new(NAME, chart.into_scene())
}
