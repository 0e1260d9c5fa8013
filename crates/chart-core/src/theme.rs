// File: crates/chart-core/src/theme.rs
// Summary: Colors and the default palette used for axes, labels and tooltips.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const DARK_GREEN: Color = Color::from_rgb(0, 100, 0);
    pub const BROWN: Color = Color::from_rgb(165, 42, 42);
    pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
    pub const STEEL_BLUE: Color = Color::from_rgb(70, 130, 180);

    /// `#rrggbb` form; alpha is emitted separately as an opacity attribute.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn alpha_f(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub title: Color,
    pub tooltip_fill: Color,
    pub tooltip_border: Color,
    pub tooltip_text: Color,
    pub annotation: Color,
    pub message: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            tick_label: Color::BLACK,
            title: Color::BLACK,
            tooltip_fill: Color::WHITE,
            tooltip_border: Color::BLACK,
            tooltip_text: Color::RED,
            annotation: Color::PURPLE,
            message: Color::from_rgb(90, 90, 100),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
