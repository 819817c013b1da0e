// File: crates/demo/src/main.rs
// Summary: Demo loads the composite CSV, walks every time window through a
// chart session, and renders each resulting frame (plus a hover frame) to PNGs.

use anyhow::{Context, Result};
use std::path::PathBuf;

use tideline_core::render::plot_area;
use tideline_core::{load_series, theme, ChartEvent, ChartSession};
use tideline_render_skia::SkiaRasterizer;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "composite.csv".to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());
    println!("Using input file: {}", path);

    let series = load_series(&path).with_context(|| format!("failed to load CSV '{}'", path))?;
    println!("Loaded {} samples", series.len());

    let mut session = ChartSession::new(series, theme::find(&theme_name))?;
    let rasterizer = SkiaRasterizer::new();

    for state in session.control_states() {
        let marker = if state.selected { "*" } else { " " };
        println!("  [{}] {}", marker, state.label);
    }

    // The session starts on the first window; render it directly, then step
    // through the rest via selection events.
    let labels = session.windows().labels().collect::<Vec<_>>();
    let first = session.frame()?;
    let out = out_name(session.selected_label());
    rasterizer.render_to_png(&first.scene, &out)?;
    println!("Wrote {} ({} nodes)", out.display(), first.scene.nodes.len());

    for label in labels.into_iter().skip(1) {
        let Some(frame) = session.handle(ChartEvent::WindowSelected(label))? else {
            continue;
        };
        let out = out_name(label);
        rasterizer.render_to_png(&frame.scene, &out)?;
        println!(
            "Wrote {} (animate: {}, {} ms)",
            out.display(),
            frame.transition.animate,
            frame.transition.duration_ms
        );
    }

    // Hover in the middle of the plot to exercise the crosshair and tooltip.
    let plot = plot_area();
    let (px, py) = (
        plot.left + plot.width() / 2.0,
        plot.top + plot.height() / 2.0,
    );
    if let Some(frame) = session.handle(ChartEvent::PointerMoved { x: px, y: py })? {
        let out = out_name("hover");
        rasterizer.render_to_png(&frame.scene, &out)?;
        if let Some(h) = session.highlight() {
            println!("Wrote {} (highlighted sample {})", out.display(), h.index);
        }
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<suffix>.png
fn out_name(suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.png", suffix));
    out
}
