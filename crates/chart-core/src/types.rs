// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margins, plot frame).

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(60, 20, 20, 50)
    }
}

/// Canvas size plus margins; everything a drawing pass needs to know about geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl Frame {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Plot-area width; saturates at zero when margins exceed the canvas.
    pub fn plot_width(&self) -> f32 {
        self.width.saturating_sub(self.insets.hsum()) as f32
    }

    pub fn plot_height(&self) -> f32 {
        self.height.saturating_sub(self.insets.vsum()) as f32
    }

    /// Canvas position of the plot-area origin.
    pub fn origin(&self) -> (f32, f32) {
        (self.insets.left as f32, self.insets.top as f32)
    }

    /// Convert a canvas-space point into plot-local coordinates.
    pub fn to_plot(&self, x: f32, y: f32) -> (f32, f32) {
        let (ox, oy) = self.origin();
        (x - ox, y - oy)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
