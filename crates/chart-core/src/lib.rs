// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports scales, draw commands, marks and SVG output.

pub mod annotation;
pub mod axis;
pub mod bars;
pub mod chart;
pub mod context;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod load;
pub mod marks;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use annotation::{draw_annotations, AnnotationLayout, AnnotationReport};
pub use axis::{Axis, Edge};
pub use bars::{BarSeries, BarUpdate};
pub use chart::{Chart, RenderOptions};
pub use context::RenderContext;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect};
pub use legend::{draw_legend, LegendEntry, LegendLayout};
pub use load::{load_csv, read_csv};
pub use marks::{draw_yearly_series, SeriesMarks, SeriesStyle};
pub use scale::{AxisScale, BandScale, LinearScale};
pub use scene::{DrawCommand, NodeId, Scene};
pub use series::{Annotation, Inventory, StatePrice, YearlyPrice};
pub use theme::{Color, Theme};
pub use tooltip::{Tooltip, TooltipState};
pub use types::{Frame, Insets};
