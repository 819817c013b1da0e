// File: crates/tideline-core/tests/frames.rs
// Purpose: Inspect composed frames for the expected scene artifacts.

use chrono::NaiveDate;
use tideline_core::scene::SceneNode;
use tideline_core::{build_frame, Highlight, Sample, Theme, Transition};

fn weekly(n: usize) -> Vec<Sample> {
    let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            Sample::new(
                start + chrono::Duration::weeks(i as i64),
                900.0 + i as f64 * 25.0,
                10.0 + i as f64,
            )
        })
        .collect()
}

fn count<F: Fn(&SceneNode) -> bool>(nodes: &[SceneNode], f: F) -> usize {
    nodes.iter().filter(|n| f(n)).count()
}

#[test]
fn frame_has_fixed_surface_and_two_lines() {
    let samples = weekly(10);
    let theme = Theme::dark();
    let frame = build_frame("all_time", &samples, None, &theme, Transition::none()).unwrap();

    assert_eq!(frame.scene.width, 1100);
    assert_eq!(frame.scene.height, 500);
    assert_eq!(frame.scene.background, theme.background);
    assert_eq!(count(&frame.scene.nodes, |n| matches!(n, SceneNode::Polyline { .. })), 2);
}

#[test]
fn polylines_have_one_vertex_per_sample() {
    let samples = weekly(13);
    let frame =
        build_frame("three_month", &samples, None, &Theme::dark(), Transition::none()).unwrap();

    for node in &frame.scene.nodes {
        if let SceneNode::Polyline { points, .. } = node {
            assert_eq!(points.len(), 13);
        }
    }
}

#[test]
fn single_sample_window_renders_axes_without_lines() {
    let samples = weekly(1);
    let frame = build_frame("all_time", &samples, None, &Theme::dark(), Transition::none()).unwrap();

    assert_eq!(count(&frame.scene.nodes, |n| matches!(n, SceneNode::Polyline { .. })), 0);
    assert!(count(&frame.scene.nodes, |n| matches!(n, SceneNode::Segment { .. })) > 0);
}

#[test]
fn highlight_adds_crosshair_markers_and_tooltip() {
    let samples = weekly(10);
    let highlight = Highlight { index: 4, pointer: (400.0, 200.0) };
    let plain = build_frame("all_time", &samples, None, &Theme::dark(), Transition::none()).unwrap();
    let lit = build_frame(
        "all_time",
        &samples,
        Some(highlight),
        &Theme::dark(),
        Transition::none(),
    )
    .unwrap();

    // One crosshair segment and two value markers on top of the base scene.
    let extra_segments = count(&lit.scene.nodes, |n| matches!(n, SceneNode::Segment { .. }))
        - count(&plain.scene.nodes, |n| matches!(n, SceneNode::Segment { .. }));
    assert_eq!(extra_segments, 1);
    assert_eq!(count(&lit.scene.nodes, |n| matches!(n, SceneNode::Circle { .. })), 2);

    let labels = lit
        .scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert!(labels.iter().any(|t| t.starts_with("Date: ")));
    assert!(labels.iter().any(|t| t.starts_with("Price: $")));
    assert!(labels.iter().any(|t| t.starts_with("Search Index: ")));
}

#[test]
fn legend_names_both_metrics() {
    let samples = weekly(10);
    let frame = build_frame("all_time", &samples, None, &Theme::dark(), Transition::none()).unwrap();
    let labels = frame
        .scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            SceneNode::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();

    assert!(labels.contains(&"Price"));
    assert!(labels.contains(&"Search Index"));
    assert!(labels.contains(&"Price (US$)"));
    assert!(labels.contains(&"Google Search Index"));
}

#[test]
fn transition_carries_through_unchanged() {
    let samples = weekly(10);
    let t = Transition::window_switch(60, 13);
    let frame = build_frame("three_month", &samples, None, &Theme::dark(), t).unwrap();
    assert_eq!(frame.transition, t);
}
