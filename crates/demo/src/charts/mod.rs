// File: crates/demo/src/charts/mod.rs
// Summary: The three gas charts and helpers they share.

pub mod inventory;
pub mod states;
pub mod yearly;

use chart_core::scale::{BandScale, LinearScale, Value};
use chart_core::series::{find_year, Yearly};
use chart_core::{Point, RenderContext, Scene, Tooltip};

/// A finished scene and the file stem it is written under.
#[derive(Clone, Debug)]
pub struct Rendered {
    pub name: String,
    pub scene: Scene,
}

impl Rendered {
    pub fn new(name: impl Into<String>, scene: Scene) -> Self {
        Self { name: name.into(), scene }
    }
}

/// Hover the point of the record whose year is `key`, showing `label(value)` above it.
///
/// Keys that do not parse or have no record are logged and leave the tooltip hidden.
pub(crate) fn hover_year<T: Yearly>(
    ctx: &mut RenderContext,
    x: &BandScale<i32>,
    y: &LinearScale,
    data: &[T],
    key: &str,
    value: impl Fn(&T) -> Value,
    label: impl Fn(Value) -> String,
) -> Tooltip {
    let mut tip = Tooltip::above_mark();
    let anchor = key.trim().parse::<i32>().ok().and_then(|year| {
        let d = find_year(data, year)?;
        let cx = x.center(&year)?;
        Some((Point::new(cx, y.to_px(value(d))), value(d)))
    });
    match anchor {
        Some((at, v)) => tip.enter(ctx, at, label(v)),
        None => tracing::warn!(key, "hover target has no matching point"),
    }
    tip
}
