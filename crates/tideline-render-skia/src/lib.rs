// File: crates/tideline-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; draws core scenes to PNG files or pixel buffers.

use anyhow::Result;
use skia_safe as skia;

use tideline_core::scene::{Scene, SceneNode, TextAlign};
use tideline_core::types::Rgba;

pub mod text;

use text::TextShaper;

fn to_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(color: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(to_color(color));
    paint
}

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_color(color));
    paint
}

/// CPU rasterizer for core scenes. Owns the font collection so repeated
/// frames reuse shaped font data.
pub struct SkiaRasterizer {
    shaper: TextShaper,
}

impl SkiaRasterizer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render a scene to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    /// Render a scene and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.paint_surface(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render a scene and return raw RGBA8 pixels plus dimensions and row
    /// stride in bytes. Rows are unpadded.
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.paint_surface(scene)?;
        let info = skia::ImageInfo::new(
            (scene.width, scene.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let row_bytes = scene.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * scene.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, scene.width, scene.height, row_bytes))
    }

    fn paint_surface(&self, scene: &Scene) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width, scene.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), scene);
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        canvas.clear(to_color(scene.background));
        for node in &scene.nodes {
            match node {
                SceneNode::Polyline { points, stroke, width } => {
                    self.draw_polyline(canvas, points, *stroke, *width);
                }
                SceneNode::Segment { from, to, stroke, width } => {
                    canvas.draw_line(*from, *to, &stroke_paint(*stroke, *width));
                }
                SceneNode::Circle { center, radius, fill } => {
                    canvas.draw_circle(*center, *radius, &fill_paint(*fill));
                }
                SceneNode::Rect { rect, fill } => {
                    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                    canvas.draw_rect(r, &fill_paint(*fill));
                }
                SceneNode::Label { text, anchor, size, color, align, rotation } => {
                    self.draw_label(canvas, text, *anchor, *size, *color, *align, *rotation);
                }
            }
        }
    }

    fn draw_polyline(&self, canvas: &skia::Canvas, points: &[(f32, f32)], stroke: Rgba, width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in points.iter().skip(1) {
            path.line_to(p);
        }
        canvas.draw_path(&path, &stroke_paint(stroke, width));
    }

    fn draw_label(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        anchor: (f32, f32),
        size: f32,
        color: Rgba,
        align: TextAlign,
        rotation: f32,
    ) {
        let width = self.shaper.measure_width(text, size);
        let x = match align {
            TextAlign::Start => anchor.0,
            TextAlign::Middle => anchor.0 - width / 2.0,
            TextAlign::End => anchor.0 - width,
        };
        if rotation != 0.0 {
            canvas.save();
            canvas.rotate(rotation, Some(skia::Point::new(anchor.0, anchor.1)));
            self.shaper.draw_left(canvas, text, x, anchor.1, size, to_color(color));
            canvas.restore();
        } else {
            self.shaper.draw_left(canvas, text, x, anchor.1, size, to_color(color));
        }
    }
}

impl Default for SkiaRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
