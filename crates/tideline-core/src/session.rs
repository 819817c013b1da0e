// File: crates/tideline-core/src/session.rs
// Summary: ChartSession state machine consuming pointer/window events.

use crate::error::ChartError;
use crate::locate::nearest_index;
use crate::render::{build_frame, plot_area, Frame, Highlight, Transition};
use crate::scale::ScalePair;
use crate::series::Series;
use crate::theme::Theme;
use crate::window::{TimeWindows, WindowSpan};

/// Interaction events, decoupled from any concrete input surface so the
/// whole state machine is testable headlessly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent<'a> {
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    WindowSelected(&'a str),
}

/// Visual state of one window-selection control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub label: &'static str,
    pub selected: bool,
}

/// Owns the loaded series, the precomputed window table, the selected
/// window, and the transient pointer highlight. All mutation happens
/// through `handle`; each event runs to completion on the caller's thread.
pub struct ChartSession {
    series: Series,
    windows: TimeWindows,
    theme: Theme,
    selected: usize,
    highlight: Option<Highlight>,
}

impl ChartSession {
    /// Build a session over a loaded series. Fails with `EmptyWindow` when
    /// any configured window has no samples, which makes every later
    /// render over a selected window infallible on that front.
    pub fn new(series: Series, theme: Theme) -> Result<Self, ChartError> {
        let windows = TimeWindows::standard(&series)?;
        Ok(Self { series, windows, theme, selected: 0, highlight: None })
    }

    pub fn selected_label(&self) -> &'static str {
        self.span().label
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn windows(&self) -> &TimeWindows {
        &self.windows
    }

    /// Per-control visual state, for an embedding to paint its buttons
    /// with the theme's selected/unselected colors.
    pub fn control_states(&self) -> Vec<ControlState> {
        self.windows
            .labels()
            .map(|label| ControlState { label, selected: label == self.selected_label() })
            .collect()
    }

    /// The single state-transition function. Returns the frame to draw,
    /// or `None` when the event changes nothing (reselecting the current
    /// window, or an unrecognized label from a miswired control).
    pub fn handle(&mut self, event: ChartEvent) -> Result<Option<Frame>, ChartError> {
        match event {
            ChartEvent::PointerMoved { x, y } => {
                let span = self.span();
                let samples = span.slice(&self.series);
                let scales = ScalePair::build(span.label, samples, plot_area())?;
                let index = nearest_index(samples, &scales.x, x);
                self.highlight = Some(Highlight { index, pointer: (x, y) });
                self.frame().map(Some)
            }
            ChartEvent::PointerLeft => {
                self.highlight = None;
                self.frame().map(Some)
            }
            ChartEvent::WindowSelected(label) => {
                if label == self.selected_label() {
                    return Ok(None);
                }
                let Some((pos, next)) = self.windows.find(label) else {
                    // Unknown labels can only come from a wiring mistake;
                    // treated as a no-op, not an error.
                    return Ok(None);
                };
                let prev_len = self.span().len(&self.series);
                let next_len = next.len(&self.series);
                let transition = Transition::window_switch(prev_len, next_len);
                self.selected = pos;
                // The old highlight indexed the previous window's slice.
                self.highlight = None;
                self.render(transition).map(Some)
            }
        }
    }

    /// Re-render the current state without animating.
    pub fn frame(&self) -> Result<Frame, ChartError> {
        self.render(Transition::none())
    }

    fn render(&self, transition: Transition) -> Result<Frame, ChartError> {
        let span = self.span();
        build_frame(
            span.label,
            span.slice(&self.series),
            self.highlight,
            &self.theme,
            transition,
        )
    }

    fn span(&self) -> &WindowSpan {
        // `selected` only ever holds positions yielded by the window table.
        self.windows
            .get_at(self.selected)
            .unwrap_or_else(|| self.windows.first())
    }
}
