// File: crates/chart-core/src/marks.rs
// Summary: Line and point marks projected through a band (x) and linear (y) scale.

use std::fmt::Display;

use crate::context::RenderContext;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale, Value};
use crate::scene::{DrawCommand, NodeId, Stroke};
use crate::series::{split_at_year, Yearly};
use crate::theme::Color;

/// Opacity of points drawn past a projection cutoff.
pub const PROJECTED_OPACITY: f32 = 0.5;

/// Records projected to pixel positions; keys outside the band domain are collected in `misses`.
#[derive(Clone, Debug, PartialEq)]
pub struct Projected<K> {
    pub points: Vec<(K, Point)>,
    pub misses: Vec<K>,
}

impl<K> Projected<K> {
    pub fn path(&self) -> Vec<Point> {
        self.points.iter().map(|(_, p)| *p).collect()
    }
}

/// Project each record to `(band center of key, y(value))`.
pub fn project<'a, K, T: 'a>(
    x: &BandScale<K>,
    y: &LinearScale,
    data: impl IntoIterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> Value,
) -> Projected<K>
where
    K: PartialEq + Clone + Display,
{
    let mut out = Projected { points: Vec::new(), misses: Vec::new() };
    for d in data {
        let k = key(d);
        match x.center(&k) {
            Some(px) => out.points.push((k, Point::new(px, y.to_px(value(d))))),
            None => {
                tracing::warn!(key = %k, "mark key outside x domain; skipped");
                out.misses.push(k);
            }
        }
    }
    out
}

/// Stroke one polyline; nothing is drawn for an empty point list.
pub fn draw_line(ctx: &mut RenderContext, class: &str, points: Vec<Point>, stroke: Stroke) -> Option<NodeId> {
    if points.is_empty() {
        return None;
    }
    Some(ctx.scene.push_classed(class, DrawCommand::Path { points, stroke }))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub fill: Color,
    pub radius: f32,
    pub opacity: f32,
}

/// One filled circle per projected record, keyed by the record's key.
pub fn draw_points<K: Display>(
    ctx: &mut RenderContext,
    class: &str,
    points: &[(K, Point)],
    style: PointStyle,
) -> Vec<NodeId> {
    points
        .iter()
        .map(|(k, p)| {
            ctx.scene.push_keyed(
                class,
                k.to_string(),
                DrawCommand::Circle { center: *p, radius: style.radius, fill: style.fill, opacity: style.opacity },
            )
        })
        .collect()
}

/// Colors and class names for one yearly series.
#[derive(Clone, Debug)]
pub struct SeriesStyle {
    /// Class of the series' points; paths use `<name>-line` and `<name>-projected`.
    pub name: String,
    pub line: Color,
    pub point: Color,
    pub width: f32,
    pub radius: f32,
}

impl SeriesStyle {
    pub fn new(name: impl Into<String>, line: Color, point: Color) -> Self {
        Self { name: name.into(), line, point, width: 2.0, radius: 4.0 }
    }

    pub fn projected_class(&self) -> String {
        format!("{}-after", self.name)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SeriesMarks {
    pub line: Option<NodeId>,
    pub projected_line: Option<NodeId>,
    pub points: Vec<NodeId>,
    pub misses: Vec<i32>,
}

/// Line plus points for a yearly series.
///
/// With a `cutoff`, records up to it form a solid line and records from it onward a
/// dashed one (sharing the cutoff record); points past the cutoff are faded.
pub fn draw_yearly_series<T: Yearly>(
    ctx: &mut RenderContext,
    x: &BandScale<i32>,
    y: &LinearScale,
    data: &[T],
    cutoff: Option<i32>,
    value: impl Fn(&T) -> Value,
    style: &SeriesStyle,
) -> SeriesMarks {
    let mut marks = SeriesMarks::default();
    let solid = Stroke::solid(style.line, style.width);
    let point_style = PointStyle { fill: style.point, radius: style.radius, opacity: 1.0 };

    match cutoff {
        None => {
            let p = project(x, y, data, |d| d.year(), &value);
            marks.line = draw_line(ctx, &format!("{}-line", style.name), p.path(), solid);
            marks.points = draw_points(ctx, &style.name, &p.points, point_style);
            marks.misses = p.misses;
        }
        Some(cut) => {
            let split = split_at_year(data, cut);
            let actual = project(x, y, split.actual.iter().copied(), |d| d.year(), &value);
            let projected = project(x, y, split.projected.iter().copied(), |d| d.year(), &value);
            let dashed = Stroke::dashed(style.line, style.width, 3.0, 3.0);

            marks.line = draw_line(ctx, &format!("{}-line", style.name), actual.path(), solid);
            marks.projected_line = draw_line(ctx, &format!("{}-projected", style.name), projected.path(), dashed);
            marks.points = draw_points(ctx, &style.name, &actual.points, point_style);

            // the cutoff record already has a solid point
            let after: Vec<(i32, Point)> = projected.points.iter().filter(|(k, _)| *k > cut).cloned().collect();
            let faded = PointStyle { opacity: PROJECTED_OPACITY, ..point_style };
            marks.points.extend(draw_points(ctx, &style.projected_class(), &after, faded));

            marks.misses = actual.misses;
            marks.misses.extend(projected.misses.into_iter().filter(|k| *k > cut));
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::YearlyPrice;
    use crate::theme::Theme;
    use crate::types::{Frame, Insets};

    #[test]
    fn project_reports_keys_outside_domain() {
        let x = BandScale::new(vec![2020, 2021], 0.0, 100.0, 0.0).unwrap();
        let y = LinearScale::zero_based(4.0, 100.0);
        let data = vec![
            YearlyPrice { year: 2020, price: 2.0 },
            YearlyPrice { year: 1999, price: 1.0 },
        ];
        let p = project(&x, &y, &data, |d| d.year, |d| d.price);
        assert_eq!(p.points, vec![(2020, Point::new(25.0, 50.0))]);
        assert_eq!(p.misses, vec![1999]);
    }

    #[test]
    fn empty_series_draws_nothing() {
        let mut ctx = RenderContext::new(Frame::new(200, 100, Insets::new(0, 0, 0, 0)), Theme::light());
        let x = BandScale::new(vec![2020], 0.0, 200.0, 0.1).unwrap();
        let y = LinearScale::zero_based(1.0, 100.0);
        let data: Vec<YearlyPrice> = Vec::new();
        let style = SeriesStyle::new("price", Color::STEEL_BLUE, Color::STEEL_BLUE);
        let marks = draw_yearly_series(&mut ctx, &x, &y, &data, None, |d| d.price, &style);
        assert!(marks.line.is_none());
        assert!(marks.points.is_empty());
        assert!(ctx.scene.is_empty());
    }
}
