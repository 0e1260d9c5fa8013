// File: crates/demo/src/charts/states.rs
// Summary: Per-state price bars for a selected year; each year change re-renders the same bars.
// Notes:
// - Years are applied in order to one chart, like successive slider moves; a snapshot of the
//   scene is taken after each.

use super::Rendered;
use crate::config::StatesConfig;
use chart_core::chart::{error_scene, no_data_scene};
use chart_core::scene::{Anchor, TextStyle};
use chart_core::{
    Axis, BandScale, BarSeries, BarUpdate, Color, DrawCommand, LinearScale, Point, RenderContext, StatePrice, Tooltip,
};

pub const NAME: &str = "states";
pub const SELECTED_YEAR_CLASS: &str = "selected-year";
const X_TITLE: &str = "Major US States";
const Y_TITLE: &str = "Gasoline Retail Prices (Dollars per Gallon)";

/// Years to render: the requested ones, else the configured default, else the latest in `data`.
pub fn resolve_years(cfg: &StatesConfig, data: &[StatePrice], requested: &[i32]) -> Vec<i32> {
    if !requested.is_empty() {
        return requested.to_vec();
    }
    cfg.default_year.or_else(|| data.iter().map(|d| d.year).max()).into_iter().collect()
}

pub fn render(cfg: &StatesConfig, data: &[StatePrice], years: &[i32], hover: Option<&str>) -> Vec<Rendered> {
    let opts = cfg.canvas.render_options();
    let years = resolve_years(cfg, data, years);
    if data.is_empty() || years.is_empty() {
        return vec![Rendered::new(NAME, no_data_scene(&opts, NAME))];
    }

    let mut ctx = RenderContext::new(opts.frame, opts.theme);
    let x = match BandScale::new(data.iter().map(|d| d.state.clone()), 0.0, ctx.plot_width(), opts.padding_inner) {
        Ok(x) => x,
        Err(err) => return vec![Rendered::new(NAME, error_scene(&opts, &err))],
    };
    Axis::bottom().with_stroke(2.0, Color::BLACK).with_title(X_TITLE, 40.0).draw(&mut ctx, &x);
    let y_axis = Axis::left().with_stroke(2.0, Color::BLACK).with_title(Y_TITLE, 50.0);
    let y = LinearScale::zero_based(1.0, ctx.plot_height());
    let mut bars = BarSeries::draw(&mut ctx, x, y, y_axis, Color::STEEL_BLUE);
    let mut tip = Tooltip::pointer_box();

    let mut out = Vec::with_capacity(years.len());
    for year in years {
        tip.leave(&mut ctx);
        let update = bars.update(&mut ctx, data, |d| d.year == year, |d| d.state.as_str(), |d| d.price);
        tracing::debug!(year, ?update, "states bars updated");
        show_selected_year(&mut ctx, year);
        if let (Some(state), BarUpdate::Updated { .. }) = (hover, update) {
            hover_bar(&mut ctx, &bars, &mut tip, state);
        }
        out.push(Rendered::new(format!("{NAME}_{year}"), ctx.scene.clone()));
    }
    out
}

fn show_selected_year(ctx: &mut RenderContext, year: i32) {
    ctx.scene.remove_class(SELECTED_YEAR_CLASS);
    let style = TextStyle::new(ctx.theme.title, 14.0).bold().anchor(Anchor::End);
    let at = Point::new(ctx.plot_width(), 0.0);
    ctx.scene.push_classed(SELECTED_YEAR_CLASS, DrawCommand::Text { text: year.to_string(), at, style });
}

/// Point at the middle of the bar for `state` and show its price in the pointer tooltip.
fn hover_bar(ctx: &mut RenderContext, bars: &BarSeries, tip: &mut Tooltip, state: &str) {
    let Some(rect) = bars.node_of(state).and_then(|id| match ctx.scene.get(id).map(|n| &n.cmd) {
        Some(DrawCommand::Rect { rect, .. }) => Some(*rect),
        _ => None,
    }) else {
        tracing::warn!(state, "hover target is not a bar");
        return;
    };
    let (ox, oy) = ctx.frame.origin();
    let pointer = Point::new(ox + (rect.left + rect.right) * 0.5, oy + (rect.top + rect.bottom) * 0.5);
    let hit = ctx.scene.hit_test(pointer).and_then(|n| n.key.clone());
    match hit.as_deref().and_then(|key| bars.value_of(key)) {
        Some(price) => tip.enter_at_pointer(ctx, pointer, format!("${price:.2}")),
        None => tracing::warn!(state, "no price under the pointer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::tooltip::TOOLTIP_CLASS;
    use chart_core::TooltipState;

    fn data() -> Vec<StatePrice> {
        let mut rows = Vec::new();
        for (year, base) in [(2019, 2.5), (2020, 2.1), (2021, 3.0)] {
            for (i, state) in ["California", "Texas", "Ohio"].iter().enumerate() {
                rows.push(StatePrice { year, state: state.to_string(), price: base + i as f64 * 0.25 });
            }
        }
        rows
    }

    fn texts<'a>(scene: &'a chart_core::Scene, class: &'a str) -> Vec<&'a str> {
        scene
            .by_class(class)
            .filter_map(|n| match &n.cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_year_is_config_then_latest() {
        let mut cfg = StatesConfig::default();
        assert_eq!(resolve_years(&cfg, &data(), &[]), vec![2021]);
        cfg.default_year = Some(2019);
        assert_eq!(resolve_years(&cfg, &data(), &[]), vec![2019]);
        assert_eq!(resolve_years(&cfg, &data(), &[2020, 2021]), vec![2020, 2021]);
    }

    #[test]
    fn one_snapshot_per_year_with_the_selected_year_shown() {
        let out = render(&StatesConfig::default(), &data(), &[2019, 2021], None);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["states_2019", "states_2021"]);
        for (r, year) in out.iter().zip(["2019", "2021"]) {
            assert_eq!(r.scene.count_class("bar"), 3);
            assert_eq!(texts(&r.scene, SELECTED_YEAR_CLASS), vec![year]);
            assert!(texts(&r.scene, "x-axis").contains(&X_TITLE));
            assert!(texts(&r.scene, "y-axis").contains(&Y_TITLE));
        }
    }

    #[test]
    fn hover_shows_a_single_price_box_per_snapshot() {
        let out = render(&StatesConfig::default(), &data(), &[2020, 2021], Some("Texas"));
        assert_eq!(texts(&out[0].scene, TOOLTIP_CLASS), vec!["$2.35"]);
        assert_eq!(texts(&out[1].scene, TOOLTIP_CLASS), vec!["$3.25"]);
        // box and label only
        assert_eq!(out[1].scene.count_class(TOOLTIP_CLASS), 2);
    }

    #[test]
    fn year_without_rows_shows_no_data_and_no_tooltip() {
        let out = render(&StatesConfig::default(), &data(), &[1990], Some("Texas"));
        assert_eq!(out[0].scene.count_class("no-data"), 1);
        assert_eq!(out[0].scene.count_class(TOOLTIP_CLASS), 0);
    }

    #[test]
    fn unknown_state_leaves_the_tooltip_hidden() {
        let mut ctx = RenderContext::new(StatesConfig::default().canvas.render_options().frame, Default::default());
        let rows = data();
        let x = BandScale::new(rows.iter().map(|d| d.state.clone()), 0.0, ctx.plot_width(), 0.3).unwrap();
        let y = LinearScale::zero_based(1.0, ctx.plot_height());
        let mut bars = BarSeries::draw(&mut ctx, x, y, Axis::left(), Color::STEEL_BLUE);
        bars.update(&mut ctx, &rows, |d| d.year == 2020, |d| d.state.as_str(), |d| d.price);
        let mut tip = Tooltip::pointer_box();
        hover_bar(&mut ctx, &bars, &mut tip, "Nevada");
        assert_eq!(*tip.state(), TooltipState::Hidden);
    }
}
