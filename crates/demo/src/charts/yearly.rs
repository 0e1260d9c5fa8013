// File: crates/demo/src/charts/yearly.rs
// Summary: Average US gasoline price per year as a steel-blue line with points.

use super::{hover_year, Rendered};
use crate::config::YearlyConfig;
use chart_core::chart::{error_scene, no_data_scene};
use chart_core::scale::max_by;
use chart_core::{draw_yearly_series, Axis, Chart, Color, SeriesStyle, YearlyPrice};

pub const NAME: &str = "yearly";

pub fn render(cfg: &YearlyConfig, data: &[YearlyPrice], hover: Option<&str>) -> Rendered {
    let opts = cfg.canvas.render_options();
    let Some(y_max) = max_by(data, |d| d.price) else {
        return Rendered::new(NAME, no_data_scene(&opts, NAME));
    };
    let mut chart = match Chart::new(&opts, NAME, data.iter().map(|d| d.year), y_max) {
        Ok(chart) => chart,
        Err(err) => return Rendered::new(NAME, error_scene(&opts, &err)),
    };
    let (x, y) = (chart.x.clone(), chart.y);

    let style = SeriesStyle::new("price", Color::STEEL_BLUE, Color::STEEL_BLUE);
    let marks = draw_yearly_series(&mut chart.ctx, &x, &y, data, None, |d| d.price, &style);
    if !marks.misses.is_empty() {
        tracing::warn!(misses = ?marks.misses, "yearly points without a slot");
    }
    chart.draw_axes(&Axis::bottom(), &Axis::left());

    if let Some(key) = hover {
        hover_year(&mut chart.ctx, &x, &y, data, key, |d| d.price, |v| format!("${v:.2}"));
    }
    Rendered::new(NAME, chart.into_scene())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::tooltip::TOOLTIP_CLASS;
    use chart_core::DrawCommand;

    fn data() -> Vec<YearlyPrice> {
        vec![
            YearlyPrice { year: 2019, price: 2.6 },
            YearlyPrice { year: 2020, price: 2.17 },
            YearlyPrice { year: 2021, price: 3.01 },
        ]
    }

    #[test]
    fn renders_line_points_and_axes_on_the_small_canvas() {
        let out = render(&YearlyConfig::default(), &data(), None);
        assert_eq!(out.name, "yearly");
        assert_eq!((out.scene.width, out.scene.height), (800, 400));
        assert_eq!(out.scene.count_class("price"), 3);
        assert_eq!(out.scene.count_class("price-line"), 1);
        assert!(out.scene.count_class("x-axis") > 0);
        assert!(out.scene.count_class("y-axis") > 0);
        assert_eq!(out.scene.count_class(TOOLTIP_CLASS), 0);
    }

    #[test]
    fn hover_shows_the_price_above_the_point() {
        let out = render(&YearlyConfig::default(), &data(), Some("2020"));
        let texts: Vec<&str> = out
            .scene
            .by_class(TOOLTIP_CLASS)
            .filter_map(|n| match &n.cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["$2.17"]);

        let missed = render(&YearlyConfig::default(), &data(), Some("1970"));
        assert_eq!(missed.scene.count_class(TOOLTIP_CLASS), 0);
    }

    #[test]
    fn empty_data_renders_a_message() {
        let out = render(&YearlyConfig::default(), &[], None);
        assert_eq!(out.scene.count_class("message"), 1);
        assert_eq!(out.scene.len(), 1);
    }
}
