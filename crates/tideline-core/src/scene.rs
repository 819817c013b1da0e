// File: crates/tideline-core/src/scene.rs
// Summary: Renderer-agnostic scene graph emitted by the render coordinator.

use crate::geometry::RectF;
use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// One draw primitive. Backends consume these in order; the coordinator
/// already sorted them back-to-front.
#[derive(Clone, Debug)]
pub enum SceneNode {
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        width: f32,
    },
    Segment {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Rgba,
        width: f32,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        fill: Rgba,
    },
    Rect {
        rect: RectF,
        fill: Rgba,
    },
    Label {
        text: String,
        anchor: (f32, f32),
        size: f32,
        color: Rgba,
        align: TextAlign,
        /// Clockwise rotation in degrees around the anchor; axis titles
        /// use -90.
        rotation: f32,
    },
}

/// A complete frame description: fixed surface size plus draw list.
/// Immutable once built; highlight changes produce a fresh scene, which is
/// what keeps a single active highlight on screen.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: Rgba) -> Self {
        Self { width, height, background, nodes: Vec::new() }
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn label(
        &mut self,
        text: impl Into<String>,
        anchor: (f32, f32),
        size: f32,
        color: Rgba,
        align: TextAlign,
    ) {
        self.nodes.push(SceneNode::Label {
            text: text.into(),
            anchor,
            size,
            color,
            align,
            rotation: 0.0,
        });
    }
}
