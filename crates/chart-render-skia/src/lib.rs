// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend. Replays a chart scene onto a surface and encodes PNG/RGBA.
// Notes:
// - Commands are plot-local; the canvas is translated by the scene origin before replay.
// - Text placement follows the SVG writer's anchor/baseline rules so both outputs line up.

use anyhow::Result;
use chart_core::scene::{Anchor, Baseline, DrawCommand, Scene, Stroke, TextStyle};
use chart_core::{Color, Point};
use skia_safe as skia;

/// Raw RGBA8 pixels read back from a rendered scene.
pub struct RgbaFrame {
    pub width: u32,
    pub height: u32,
    pub stride: usize,
    pub pixels: Vec<u8>,
}

#[derive(Default)]
pub struct SkiaRenderer;

impl SkiaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn rasterize(&self, scene: &Scene) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_sk(scene.background));

        canvas.save();
        canvas.translate((scene.origin.x, scene.origin.y));
        for node in scene.nodes() {
            draw_command(canvas, &node.cmd);
        }
        canvas.restore();
        tracing::debug!(nodes = scene.len(), width = scene.width, height = scene.height, "scene rasterized");
        Ok(surface)
    }

    /// Render into an RGBA8 (unpremultiplied) buffer.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<RgbaFrame> {
        let mut surface = self.rasterize(scene)?;
        let info = skia::ImageInfo::new(
            (scene.width as i32, scene.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = scene.width as usize * 4;
        let mut pixels = vec![0u8; stride * scene.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok(RgbaFrame { width: scene.width, height: scene.height, stride, pixels })
    }

    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.rasterize(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_sk(stroke.color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    if let Some([on, off]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(to_sk(color));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_command(canvas: &skia::Canvas, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Path { points, stroke } => {
            let Some((first, rest)) = points.split_first() else { return };
            let mut path = skia::Path::new();
            path.move_to((first.x, first.y));
            for p in rest {
                path.line_to((p.x, p.y));
            }
            canvas.draw_path(&path, &stroke_paint(stroke));
        }
        DrawCommand::Circle { center, radius, fill, opacity } => {
            let mut paint = fill_paint(*fill);
            paint.set_alpha_f(fill.alpha_f() * opacity);
            canvas.draw_circle((center.x, center.y), *radius, &paint);
        }
        DrawCommand::Rect { rect, fill, stroke } => {
            let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
            if let Some(color) = fill {
                canvas.draw_rect(r, &fill_paint(*color));
            }
            if let Some(stroke) = stroke {
                canvas.draw_rect(r, &stroke_paint(stroke));
            }
        }
        DrawCommand::Line { from, to, stroke } => {
            canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
        }
        DrawCommand::Text { text, at, style } => draw_text(canvas, text, *at, style),
    }
}

fn draw_text(canvas: &skia::Canvas, text: &str, at: Point, style: &TextStyle) {
    let mut font = skia::Font::default();
    font.set_size(style.size);
    font.set_embolden(style.bold);
    let paint = fill_paint(style.color);

    let (width, _) = font.measure_str(text, Some(&paint));
    let x = match style.anchor {
        Anchor::Start => at.x,
        Anchor::Middle => at.x - width * 0.5,
        Anchor::End => at.x - width,
    };
    // approximate cap-height shifts for the default typeface
    let y = match style.baseline {
        Baseline::Alphabetic => at.y,
        Baseline::Middle => at.y + style.size * 0.35,
        Baseline::Hanging => at.y + style.size * 0.8,
    };

    match style.rotate {
        Some(degrees) => {
            canvas.save();
            canvas.rotate(degrees, None);
            canvas.draw_str(text, (x, y), &font, &paint);
            canvas.restore();
        }
        None => {
            canvas.draw_str(text, (x, y), &font, &paint);
        }
    }
}
