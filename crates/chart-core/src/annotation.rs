// File: crates/chart-core/src/annotation.rs
// Summary: Callout labels joined to data by year, with explicit reporting of unmatched years.

use crate::context::RenderContext;
use crate::error::ChartError;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale, Value};
use crate::scene::{Anchor, DrawCommand, NodeId, Stroke, TextStyle};
use crate::series::{find_year, Annotation, Yearly};

pub const ANNOTATION_TEXT_CLASS: &str = "annotation-text";
pub const ANNOTATION_LINE_CLASS: &str = "annotation-line";

/// Pixel offsets below the anchored point (positive y is down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationLayout {
    pub text_offset: f32,
    pub line_start: f32,
    pub line_end: f32,
    pub font_size: f32,
    pub line_width: f32,
}

impl Default for AnnotationLayout {
    fn default() -> Self {
        Self { text_offset: 60.0, line_start: 50.0, line_end: 5.0, font_size: 12.0, line_width: 2.0 }
    }
}

#[derive(Debug, Default)]
pub struct AnnotationReport {
    /// Years that produced a label and connector.
    pub drawn: Vec<(i32, [NodeId; 2])>,
    /// One `LookupMiss` per annotation whose year had no record or no x slot.
    pub missed: Vec<ChartError>,
}

impl AnnotationReport {
    pub fn is_complete(&self) -> bool {
        self.missed.is_empty()
    }
}

/// Draw every annotation whose year resolves; misses are skipped, logged and reported.
pub fn draw_annotations<T: Yearly>(
    ctx: &mut RenderContext,
    x: &BandScale<i32>,
    y: &LinearScale,
    data: &[T],
    annotations: &[Annotation],
    value: impl Fn(&T) -> Value,
    layout: AnnotationLayout,
) -> AnnotationReport {
    let mut report = AnnotationReport::default();
    let color = ctx.theme.annotation;
    for a in annotations {
        let anchor = find_year(data, a.year).and_then(|d| x.center(&a.year).map(|cx| Point::new(cx, y.to_px(value(d)))));
        let Some(p) = anchor else {
            tracing::warn!(year = a.year, label = %a.label, "annotation has no matching record; skipped");
            report.missed.push(ChartError::lookup_miss(a.year));
            continue;
        };
        let style = TextStyle::new(color, layout.font_size).bold().anchor(Anchor::Middle);
        let text = ctx.scene.push_keyed(
            ANNOTATION_TEXT_CLASS,
            a.year.to_string(),
            DrawCommand::Text { text: a.label.clone(), at: p.offset(0.0, layout.text_offset), style },
        );
        let line = ctx.scene.push_keyed(
            ANNOTATION_LINE_CLASS,
            a.year.to_string(),
            DrawCommand::Line {
                from: p.offset(0.0, layout.line_start),
                to: p.offset(0.0, layout.line_end),
                stroke: Stroke::solid(color, layout.line_width),
            },
        );
        report.drawn.push((a.year, [text, line]));
    }
    report
}
