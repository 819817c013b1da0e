// File: crates/tideline-core/src/render.rs
// Summary: Composes scales, ticks, legend, lines, and highlight artifacts
// into a Scene, plus the window-switch transition policy.

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::format;
use crate::geometry::RectF;
use crate::grid::{linspace, nice_ticks};
use crate::scale::ScalePair;
use crate::scene::{Scene, SceneNode, TextAlign};
use crate::series::Sample;
use crate::theme::Theme;
use crate::types::{Insets, Rgba, HEIGHT, LEGEND_OFFSET, TICK_COUNT, WIDTH};

const LINE_WIDTH: f32 = 2.0;
const TICK_LEN: f32 = 6.0;
const TICK_FONT: f32 = 13.0;
const TITLE_FONT: f32 = 14.0;
const MARKER_RADIUS: f32 = 4.0;
const TOOLTIP_FONT: f32 = 13.0;
const TOOLTIP_OFFSET: f32 = 12.0;
const TOOLTIP_LINE_STEP: f32 = 16.0;
const TRANSITION_MS: u64 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
}

/// How the embedding should move from the previous frame to this one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub animate: bool,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Transition {
    /// Instant redraw (pointer interaction, first frame).
    pub fn none() -> Self {
        Self { animate: false, duration_ms: 0, easing: Easing::Linear }
    }

    /// Window-switch policy: animate when the new window has at most as
    /// many samples as the previous one; redraw instantly into a denser
    /// window, where tweening the path would resample visibly.
    pub fn window_switch(prev_len: usize, next_len: usize) -> Self {
        Self {
            animate: next_len <= prev_len,
            duration_ms: TRANSITION_MS,
            easing: Easing::Linear,
        }
    }
}

/// One rendered frame: the scene plus how to arrive at it.
#[derive(Clone, Debug)]
pub struct Frame {
    pub scene: Scene,
    pub transition: Transition,
}

/// Active pointer highlight: located sample index plus the raw pointer
/// position the tooltip anchors to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub index: usize,
    pub pointer: (f32, f32),
}

struct Feature {
    name: &'static str,
    color: Rgba,
    value: fn(&Sample) -> f64,
}

fn features(theme: &Theme) -> [Feature; 2] {
    [
        Feature { name: "Price", color: theme.price_line, value: |s| s.price },
        Feature { name: "Search Index", color: theme.index_line, value: |s| s.index },
    ]
}

/// Plot rectangle shared by the coordinator and the session's locator.
pub fn plot_area() -> RectF {
    RectF::inset(WIDTH, HEIGHT, &Insets::default())
}

/// Build a complete frame for one window. `highlight`, when present, must
/// index into `samples`. Fails with `EmptyWindow` on a zero-sample window.
pub fn build_frame(
    label: &str,
    samples: &[Sample],
    highlight: Option<Highlight>,
    theme: &Theme,
    transition: Transition,
) -> Result<Frame, ChartError> {
    let plot = plot_area();
    let scales = ScalePair::build(label, samples, plot)?;

    let mut scene = Scene::new(WIDTH, HEIGHT, theme.background);
    draw_gridlines(&mut scene, plot, theme);
    draw_x_axis(&mut scene, plot, &scales, theme);
    draw_price_axis(&mut scene, plot, &scales, theme);
    draw_index_axis(&mut scene, plot, &scales, theme);
    draw_legend(&mut scene, plot, theme);
    draw_lines(&mut scene, samples, &scales, theme);
    if let Some(h) = highlight {
        draw_highlight(&mut scene, samples, &scales, plot, h, theme);
    }

    Ok(Frame { scene, transition })
}

// ---- helpers ----------------------------------------------------------------

fn draw_gridlines(scene: &mut Scene, plot: RectF, theme: &Theme) {
    let interval = plot.height() / (TICK_COUNT as f32 - 1.0);
    for i in 0..TICK_COUNT - 1 {
        let y = plot.top + interval * i as f32;
        scene.push(SceneNode::Segment {
            from: (plot.left, y),
            to: (plot.right, y),
            stroke: theme.grid,
            width: 1.0,
        });
    }
}

fn draw_x_axis(scene: &mut Scene, plot: RectF, scales: &ScalePair, theme: &Theme) {
    scene.push(SceneNode::Segment {
        from: (plot.left, plot.bottom),
        to: (plot.right, plot.bottom),
        stroke: theme.axis_line,
        width: 1.5,
    });

    for t in linspace(scales.x.t_min, scales.x.t_max, TICK_COUNT) {
        let x = scales.x.to_px(t);
        scene.push(SceneNode::Segment {
            from: (x, plot.bottom),
            to: (x, plot.bottom + TICK_LEN),
            stroke: theme.tick,
            width: 1.0,
        });
        if let Some(date) = NaiveDate::from_num_days_from_ce_opt(t.round() as i32) {
            scene.label(
                format::tick_date(date),
                (x, plot.bottom + TICK_LEN + TICK_FONT),
                TICK_FONT,
                theme.axis_label,
                TextAlign::Middle,
            );
        }
    }
}

fn draw_price_axis(scene: &mut Scene, plot: RectF, scales: &ScalePair, theme: &Theme) {
    scene.push(SceneNode::Segment {
        from: (plot.left, plot.top),
        to: (plot.left, plot.bottom),
        stroke: theme.axis_line,
        width: 1.5,
    });

    for v in nice_ticks(scales.price.vmin, scales.price.vmax, TICK_COUNT) {
        let y = scales.price.to_px(v);
        scene.push(SceneNode::Segment {
            from: (plot.left - TICK_LEN, y),
            to: (plot.left, y),
            stroke: theme.tick,
            width: 1.0,
        });
        scene.label(
            format::tick_value(v),
            (plot.left - TICK_LEN - 2.0, y + TICK_FONT * 0.35),
            TICK_FONT,
            theme.axis_label,
            TextAlign::End,
        );
    }

    scene.push(SceneNode::Label {
        text: "Price (US$)".to_string(),
        anchor: (plot.left - 40.0, plot.top + plot.height() / 2.0),
        size: TITLE_FONT,
        color: theme.axis_label,
        align: TextAlign::Middle,
        rotation: -90.0,
    });
}

fn draw_index_axis(scene: &mut Scene, plot: RectF, scales: &ScalePair, theme: &Theme) {
    scene.push(SceneNode::Segment {
        from: (plot.right, plot.top),
        to: (plot.right, plot.bottom),
        stroke: theme.axis_line,
        width: 1.5,
    });

    for v in nice_ticks(scales.index.vmin, scales.index.vmax, TICK_COUNT) {
        let y = scales.index.to_px(v);
        scene.push(SceneNode::Segment {
            from: (plot.right, y),
            to: (plot.right + TICK_LEN, y),
            stroke: theme.tick,
            width: 1.0,
        });
        scene.label(
            format::tick_value(v),
            (plot.right + TICK_LEN + 2.0, y + TICK_FONT * 0.35),
            TICK_FONT,
            theme.axis_label,
            TextAlign::Start,
        );
    }

    scene.push(SceneNode::Label {
        text: "Google Search Index".to_string(),
        anchor: (plot.right + 40.0, plot.top + plot.height() / 2.0),
        size: TITLE_FONT,
        color: theme.axis_label,
        align: TextAlign::Middle,
        rotation: -90.0,
    });
}

fn draw_legend(scene: &mut Scene, plot: RectF, theme: &Theme) {
    let legend_x = plot.right - LEGEND_OFFSET;
    for (i, f) in features(theme).iter().enumerate() {
        let row = i as f32 * 20.0;
        scene.push(SceneNode::Rect {
            rect: RectF::from_ltwh(legend_x + 10.0, plot.top + row + 24.0, 30.0, 5.0),
            fill: f.color,
        });
        scene.label(
            f.name,
            (legend_x + 50.0, plot.top + row + 30.0),
            TITLE_FONT,
            theme.legend_text,
            TextAlign::Start,
        );
    }
}

fn draw_lines(scene: &mut Scene, samples: &[Sample], scales: &ScalePair, theme: &Theme) {
    if samples.len() < 2 {
        return;
    }
    let value_scales = [&scales.price, &scales.index];
    for (f, vs) in features(theme).iter().zip(value_scales) {
        let points = samples
            .iter()
            .map(|s| (scales.x.to_px(s.day() as f64), vs.to_px((f.value)(s))))
            .collect::<Vec<_>>();
        scene.push(SceneNode::Polyline { points, stroke: f.color, width: LINE_WIDTH });
    }
}

fn draw_highlight(
    scene: &mut Scene,
    samples: &[Sample],
    scales: &ScalePair,
    plot: RectF,
    highlight: Highlight,
    theme: &Theme,
) {
    let s = &samples[highlight.index.min(samples.len() - 1)];
    let x = scales.x.to_px(s.day() as f64);

    scene.push(SceneNode::Segment {
        from: (x, plot.top),
        to: (x, plot.bottom),
        stroke: theme.crosshair,
        width: 1.0,
    });

    let value_scales = [&scales.price, &scales.index];
    for (f, vs) in features(theme).iter().zip(value_scales) {
        scene.push(SceneNode::Circle {
            center: (x, vs.to_px((f.value)(s))),
            radius: MARKER_RADIUS,
            fill: f.color,
        });
    }

    let (px, py) = highlight.pointer;
    let lines = [
        format!("Date: {}", format::tooltip_date(s.date)),
        format!("Price: ${}", format::tick_value(s.price)),
        format!("Search Index: {}", format::tick_value(s.index)),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        scene.label(
            text,
            (px + TOOLTIP_OFFSET, py + TOOLTIP_OFFSET + TOOLTIP_LINE_STEP * (i as f32 + 1.0)),
            TOOLTIP_FONT,
            theme.tooltip_text,
            TextAlign::Start,
        );
    }
}
