// File: crates/tideline-core/src/series.rs
// Summary: Sample/Series model for the dual-metric weekly dataset.

use chrono::{Datelike, NaiveDate};

use crate::error::ChartError;

/// One observation: a calendar date with the two tracked metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    /// Closing price in US dollars.
    pub price: f64,
    /// Search-trend index for the same week.
    pub index: f64,
}

impl Sample {
    pub const fn new(date: NaiveDate, price: f64, index: f64) -> Self {
        Self { date, price, index }
    }

    /// Date as a day count, the logical X coordinate for scales.
    #[inline]
    pub fn day(&self) -> i64 {
        self.date.num_days_from_ce() as i64
    }
}

/// Immutable, time-ordered sequence of samples.
///
/// Invariant: dates are strictly ascending, no duplicates. Enforced at
/// construction; every downstream consumer (windows, scales, the locator)
/// relies on it.
#[derive(Clone, Debug)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Validate ordering and wrap the samples.
    pub fn try_new(samples: Vec<Sample>) -> Result<Self, ChartError> {
        for pos in 1..samples.len() {
            if samples[pos].date <= samples[pos - 1].date {
                return Err(ChartError::OutOfOrder { pos });
            }
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
