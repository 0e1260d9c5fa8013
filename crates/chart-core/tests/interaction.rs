// File: crates/chart-core/tests/interaction.rs
// Purpose: Tooltip enter/leave invariants and annotation lookup misses.

use chart_core::annotation::{ANNOTATION_LINE_CLASS, ANNOTATION_TEXT_CLASS};
use chart_core::tooltip::TOOLTIP_CLASS;
use chart_core::{
    draw_annotations, Annotation, AnnotationLayout, Chart, ChartError, Inventory, Point, RenderOptions, Tooltip,
    TooltipState,
};

fn chart() -> Chart<i32> {
    Chart::new(&RenderOptions::default(), "test", 2005..=2024, 25.0).unwrap()
}

#[test]
fn enter_shows_exactly_one_label_and_leave_clears_it() {
    let mut c = chart();
    let mut tip = Tooltip::above_mark();
    assert_eq!(*tip.state(), TooltipState::Hidden);

    tip.enter(&mut c.ctx, Point::new(100.0, 200.0), "20.5 MMbpd");
    assert_eq!(c.ctx.scene.count_class(TOOLTIP_CLASS), 1);
    assert!(tip.is_shown());

    tip.leave(&mut c.ctx);
    assert_eq!(c.ctx.scene.count_class(TOOLTIP_CLASS), 0);
    assert_eq!(*tip.state(), TooltipState::Hidden);

    // leaving again is harmless
    tip.leave(&mut c.ctx);
    assert_eq!(c.ctx.scene.count_class(TOOLTIP_CLASS), 0);
}

#[test]
fn repeated_enter_never_stacks() {
    let mut c = chart();
    let mut tip = Tooltip::pointer_box();
    for i in 0..5 {
        tip.enter_at_pointer(&mut c.ctx, Point::new(100.0 + i as f32 * 10.0, 150.0), format!("${}.00", i));
    }
    // box + text of a single tooltip
    assert_eq!(c.ctx.scene.count_class(TOOLTIP_CLASS), 2);
    match tip.state() {
        TooltipState::Shown { text, nodes, .. } => {
            assert_eq!(text, "$4.00");
            assert_eq!(nodes.len(), 2);
        }
        TooltipState::Hidden => panic!("tooltip should be shown"),
    }
}

#[test]
fn two_controllers_share_one_visible_tooltip() {
    // point groups of both series remove any label left by the other
    let mut c = chart();
    let mut consumed = Tooltip::above_mark();
    let mut supply = Tooltip::above_mark();
    consumed.enter(&mut c.ctx, Point::new(10.0, 10.0), "a");
    supply.enter(&mut c.ctx, Point::new(20.0, 20.0), "b");
    assert_eq!(c.ctx.scene.count_class(TOOLTIP_CLASS), 1);
}

#[test]
fn annotation_for_missing_year_is_reported_not_fatal() {
    let mut c = chart();
    let data: Vec<Inventory> =
        (2005..=2024).map(|year| Inventory { year, consumed: 20.0, gas_supply: 18.0 }).collect();
    let annotations = vec![
        Annotation::new(2008, "Great Recession"),
        Annotation::new(1973, "Oil embargo"),
        Annotation::new(2020, "Covid-19 Pandemic"),
    ];
    let (x, y) = (c.x.clone(), c.y);
    let report = draw_annotations(&mut c.ctx, &x, &y, &data, &annotations, |d| d.consumed, AnnotationLayout::default());

    assert!(!report.is_complete());
    assert_eq!(report.drawn.iter().map(|(y, _)| *y).collect::<Vec<_>>(), vec![2008, 2020]);
    assert_eq!(report.missed.len(), 1);
    assert!(matches!(&report.missed[0], ChartError::LookupMiss { key } if key == "1973"));
    assert_eq!(c.ctx.scene.count_class(ANNOTATION_TEXT_CLASS), 2);
    assert_eq!(c.ctx.scene.count_class(ANNOTATION_LINE_CLASS), 2);
}

#[test]
fn annotation_hangs_below_its_point() {
    let mut c = chart();
    let data = vec![Inventory { year: 2011, consumed: 12.5, gas_supply: 10.0 }];
    let (x, y) = (c.x.clone(), c.y);
    let report = draw_annotations(
        &mut c.ctx,
        &x,
        &y,
        &data,
        &[Annotation::new(2011, "N.Africa and Middle East crisis")],
        |d| d.consumed,
        AnnotationLayout::default(),
    );
    let [text_id, line_id] = report.drawn[0].1;
    let anchor_y = y.to_px(12.5);
    match &c.ctx.scene.get(text_id).unwrap().cmd {
        chart_core::DrawCommand::Text { at, .. } => assert_eq!(at.y, anchor_y + 60.0),
        other => panic!("unexpected {other:?}"),
    }
    match &c.ctx.scene.get(line_id).unwrap().cmd {
        chart_core::DrawCommand::Line { from, to, .. } => {
            assert_eq!(from.y, anchor_y + 50.0);
            assert_eq!(to.y, anchor_y + 5.0);
            assert_eq!(from.x, x.center(&2011).unwrap());
        }
        other => panic!("unexpected {other:?}"),
    }
}
