// File: crates/tideline-render-skia/tests/raster.rs
// Purpose: Basic end-to-end raster checks for PNG and RGBA outputs.

use tideline_core::geometry::RectF;
use tideline_core::scene::{Scene, SceneNode};
use tideline_core::types::Rgba;
use tideline_render_skia::SkiaRasterizer;

fn small_scene() -> Scene {
    let mut scene = Scene::new(120, 80, Rgba::rgb(18, 18, 20));
    scene.push(SceneNode::Segment {
        from: (10.0, 70.0),
        to: (110.0, 70.0),
        stroke: Rgba::rgb(180, 180, 190),
        width: 1.5,
    });
    scene.push(SceneNode::Polyline {
        points: vec![(10.0, 60.0), (40.0, 20.0), (70.0, 45.0), (110.0, 15.0)],
        stroke: Rgba::rgb(0, 255, 255),
        width: 2.0,
    });
    scene.push(SceneNode::Circle { center: (40.0, 20.0), radius: 4.0, fill: Rgba::rgb(255, 0, 0) });
    scene.push(SceneNode::Rect {
        rect: RectF::from_ltwh(80.0, 10.0, 30.0, 5.0),
        fill: Rgba::rgb(0, 0, 255),
    });
    scene
}

#[test]
fn render_smoke_png() {
    let scene = small_scene();
    let rasterizer = SkiaRasterizer::new();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    rasterizer.render_to_png(&scene, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = rasterizer.render_to_png_bytes(&scene).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let scene = small_scene();
    let rasterizer = SkiaRasterizer::new();

    let (pixels, w, h, stride) = rasterizer.render_to_rgba8(&scene).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, pixels.len());
    assert_eq!(stride, w as usize * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(pixels[3], 255);
    // Background channels match the clear color.
    assert_eq!(&pixels[0..3], &[18, 18, 20]);
}
