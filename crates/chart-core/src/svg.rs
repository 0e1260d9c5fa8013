// File: crates/chart-core/src/svg.rs
// Summary: Serialises a draw-command scene into standalone SVG markup.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::scene::{Anchor, Baseline, DrawCommand, Scene, Stroke, TextStyle};

const FONT_FAMILY: &str = "sans-serif";

/// Escape text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Compact number formatting: integers without a trailing `.0`, others to 3 decimals.
fn num(v: f32) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.3}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut out = format!(r#" stroke="{}" stroke-width="{}""#, s.color, num(s.width));
    if s.color.a < 255 {
        let _ = write!(out, r#" stroke-opacity="{}""#, num(s.color.alpha_f()));
    }
    if let Some([on, off]) = s.dash {
        let _ = write!(out, r#" stroke-dasharray="{} {}""#, num(on), num(off));
    }
    out
}

fn text_attrs(style: &TextStyle) -> String {
    let anchor = match style.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let mut out = format!(
        r#" fill="{}" font-family="{}" font-size="{}px" text-anchor="{}""#,
        style.color,
        FONT_FAMILY,
        num(style.size),
        anchor
    );
    if style.bold {
        out.push_str(r#" font-weight="bold""#);
    }
    match style.baseline {
        Baseline::Alphabetic => {}
        Baseline::Middle => out.push_str(r#" dominant-baseline="middle""#),
        Baseline::Hanging => out.push_str(r#" dominant-baseline="hanging""#),
    }
    if let Some(deg) = style.rotate {
        let _ = write!(out, r#" transform="rotate({})""#, num(deg));
    }
    out
}

fn write_command(out: &mut String, class: Option<&str>, cmd: &DrawCommand) {
    let class_attr = class.map(|c| format!(r#" class="{}""#, escape(c))).unwrap_or_default();
    match cmd {
        DrawCommand::Path { points, stroke } => {
            if points.is_empty() {
                return;
            }
            let mut d = String::new();
            for (i, p) in points.iter().enumerate() {
                let _ = write!(d, "{}{},{}", if i == 0 { "M" } else { "L" }, num(p.x), num(p.y));
            }
            let _ = writeln!(out, r#"    <path{class_attr} d="{d}" fill="none"{}/>"#, stroke_attrs(stroke));
        }
        DrawCommand::Circle { center, radius, fill, opacity } => {
            let mut extra = String::new();
            let alpha = opacity * fill.alpha_f();
            if alpha < 1.0 {
                extra = format!(r#" opacity="{}""#, num(alpha));
            }
            let _ = writeln!(
                out,
                r#"    <circle{class_attr} cx="{}" cy="{}" r="{}" fill="{}"{extra}/>"#,
                num(center.x),
                num(center.y),
                num(*radius),
                fill
            );
        }
        DrawCommand::Rect { rect, fill, stroke } => {
            let fill_attr = match fill {
                Some(c) => format!(r#" fill="{}""#, c),
                None => r#" fill="none""#.to_string(),
            };
            let stroke_attr = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            let _ = writeln!(
                out,
                r#"    <rect{class_attr} x="{}" y="{}" width="{}" height="{}"{fill_attr}{stroke_attr}/>"#,
                num(rect.left),
                num(rect.top),
                num(rect.width().max(0.0)),
                num(rect.height().max(0.0))
            );
        }
        DrawCommand::Text { text, at, style } => {
            let _ = writeln!(
                out,
                r#"    <text{class_attr} x="{}" y="{}"{}>{}</text>"#,
                num(at.x),
                num(at.y),
                text_attrs(style),
                escape(text)
            );
        }
        DrawCommand::Line { from, to, stroke } => {
            let _ = writeln!(
                out,
                r#"    <line{class_attr} x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke_attrs(stroke)
            );
        }
    }
}

/// Full SVG document for `scene`.
pub fn write_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        scene.width, scene.height, scene.background
    );
    let _ = writeln!(
        out,
        r#"  <g transform="translate({},{})">"#,
        num(scene.origin.x),
        num(scene.origin.y)
    );
    for node in scene.nodes() {
        write_command(&mut out, node.class.as_deref(), &node.cmd);
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

impl Scene {
    pub fn to_svg(&self) -> String {
        write_svg(self)
    }

    /// Write the scene as SVG to `path`, creating parent directories.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        tracing::debug!(path = %path.display(), nodes = self.len(), "wrote svg");
        Ok(())
    }
}
