// File: crates/chart-core/tests/bars.rs
// Purpose: Year-filtered bar re-render: rescaling, idempotence and in-order slider updates.

use chart_core::{
    Axis, AxisScale, BandScale, BarSeries, BarUpdate, Color, DrawCommand, Frame, Insets, LinearScale, RenderContext,
    StatePrice, Theme,
};

fn rows() -> Vec<StatePrice> {
    let mut out = Vec::new();
    for (year, base) in [(2019, 2.5), (2020, 2.1), (2021, 3.0)] {
        for (i, state) in ["California", "Texas", "New York"].iter().enumerate() {
            out.push(StatePrice { year, state: state.to_string(), price: base + i as f64 * 0.25 });
        }
    }
    out
}

fn setup(data: &[StatePrice]) -> (RenderContext, BarSeries) {
    let mut ctx = RenderContext::new(Frame::new(800, 500, Insets::new(60, 20, 20, 50)), Theme::light());
    let x = BandScale::new(data.iter().map(|d| d.state.clone()), 0.0, ctx.plot_width(), 0.3).unwrap();
    let y = LinearScale::zero_based(1.0, ctx.plot_height());
    let bars = BarSeries::draw(&mut ctx, x, y, Axis::left().with_stroke(2.0, Color::BLACK), Color::STEEL_BLUE);
    (ctx, bars)
}

fn y_axis_labels(ctx: &RenderContext) -> Vec<String> {
    ctx.scene
        .by_class("y-axis")
        .filter_map(|n| match &n.cmd {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn select(bars: &mut BarSeries, ctx: &mut RenderContext, data: &[StatePrice], year: i32) -> BarUpdate {
    bars.update(ctx, data, |d| d.year == year, |d| d.state.as_str(), |d| d.price)
}

#[test]
fn filtering_rescales_to_the_subset_max() {
    let data = rows();
    let (mut ctx, mut bars) = setup(&data);
    let out = select(&mut bars, &mut ctx, &data, 2020);
    assert_eq!(out, BarUpdate::Updated { bars: 3, max: 2.6 });
    assert_eq!(bars.y().domain(), (0.0, 2.6));
    let rects = bars.rects(&ctx);
    assert_eq!(rects.len(), 3);
    // New York holds the max and spans the full plot height
    assert_eq!(rects[2].top, 0.0);
    assert_eq!(rects[2].bottom, ctx.plot_height());
    assert_eq!(bars.value_of("Texas"), Some(2.35));
}

#[test]
fn rerender_with_same_filter_is_idempotent() {
    let data = rows();
    let (mut ctx, mut bars) = setup(&data);
    select(&mut bars, &mut ctx, &data, 2021);
    let first_rects = bars.rects(&ctx);
    let first_svg = ctx.scene.to_svg();
    select(&mut bars, &mut ctx, &data, 2021);
    assert_eq!(bars.rects(&ctx), first_rects);
    assert_eq!(ctx.scene.to_svg(), first_svg);
}

#[test]
fn slider_changes_apply_in_order() {
    let data = rows();
    let (mut ctx, mut bars) = setup(&data);
    for year in [2019, 2021, 2020] {
        select(&mut bars, &mut ctx, &data, year);
    }
    // the last value wins, exactly as if 2020 had been applied alone
    let after_sequence = bars.rects(&ctx);
    let (mut ctx2, mut bars2) = setup(&data);
    select(&mut bars2, &mut ctx2, &data, 2020);
    assert_eq!(after_sequence, bars2.rects(&ctx2));
    // a single y axis is present after several redraws
    assert_eq!(ctx.scene.count_class("y-axis"), ctx2.scene.count_class("y-axis"));
}

#[test]
fn year_without_rows_reports_no_data() {
    let data = rows();
    let (mut ctx, mut bars) = setup(&data);
    let unit_axis: Vec<String> =
        LinearScale::zero_based(1.0, ctx.plot_height()).ticks().into_iter().map(|t| t.label).collect();
    select(&mut bars, &mut ctx, &data, 2021);
    assert_ne!(y_axis_labels(&ctx), unit_axis);

    assert_eq!(select(&mut bars, &mut ctx, &data, 1990), BarUpdate::NoData);
    assert!(bars.rects(&ctx).iter().all(|r| r.height() == 0.0 && r.top.is_finite()));
    assert_eq!(ctx.scene.count_class("no-data"), 1);
    // the 2021 scale does not linger behind the message
    assert_eq!(bars.y().domain(), (0.0, 1.0));
    assert_eq!(y_axis_labels(&ctx), unit_axis);

    // recovering clears the message and rescales
    assert_eq!(select(&mut bars, &mut ctx, &data, 2019), BarUpdate::Updated { bars: 3, max: 3.0 });
    assert_eq!(ctx.scene.count_class("no-data"), 0);
    assert_eq!(bars.y().domain(), (0.0, 3.0));
}
