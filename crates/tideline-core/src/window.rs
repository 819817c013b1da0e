// File: crates/tideline-core/src/window.rs
// Summary: Named time windows as precomputed suffix slices of the series.

use crate::error::ChartError;
use crate::series::{Sample, Series};

/// One named window: a contiguous suffix of the full series.
///
/// `tail` is the number of trailing samples the window keeps; 0 keeps the
/// whole series. `start` is resolved once against the series length and
/// never changes afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSpan {
    pub label: &'static str,
    pub tail: usize,
    pub start: usize,
}

impl WindowSpan {
    pub fn slice<'a>(&self, series: &'a Series) -> &'a [Sample] {
        &series.samples()[self.start..]
    }

    pub fn len(&self, series: &Series) -> usize {
        series.len() - self.start
    }
}

/// The fixed window table, built once at startup.
#[derive(Clone, Debug)]
pub struct TimeWindows {
    spans: Vec<WindowSpan>,
}

/// Standard window labels with their tail lengths in weekly samples.
const STANDARD: [(&str, usize); 4] = [
    ("all_time", 0),
    ("one_year", 52),
    ("six_month", 26),
    ("three_month", 13),
];

impl TimeWindows {
    /// Build the standard windows over a series. A tail longer than the
    /// series clamps to the full series; an empty series fails because
    /// every window would be empty.
    pub fn standard(series: &Series) -> Result<Self, ChartError> {
        let mut spans = Vec::with_capacity(STANDARD.len());
        for (label, tail) in STANDARD {
            let start = if tail == 0 { 0 } else { series.len().saturating_sub(tail) };
            if start >= series.len() {
                return Err(ChartError::EmptyWindow { label: label.to_string() });
            }
            spans.push(WindowSpan { label, tail, start });
        }
        Ok(Self { spans })
    }

    pub fn get(&self, label: &str) -> Option<&WindowSpan> {
        self.spans.iter().find(|s| s.label == label)
    }

    /// Position and span for a label, if configured.
    pub fn find(&self, label: &str) -> Option<(usize, &WindowSpan)> {
        self.spans.iter().enumerate().find(|(_, s)| s.label == label)
    }

    pub fn get_at(&self, pos: usize) -> Option<&WindowSpan> {
        self.spans.get(pos)
    }

    /// First configured window, the default selection at startup.
    pub fn first(&self) -> &WindowSpan {
        &self.spans[0]
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.spans.iter().map(|s| s.label)
    }
}
