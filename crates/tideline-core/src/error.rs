// File: crates/tideline-core/src/error.rs
// Summary: Typed error surface for loading, window setup, and scale building.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A CSV row carried a field that failed date or numeric parsing.
    /// The dataset is small and fixed, so the load aborts rather than
    /// skipping rows.
    #[error("row {line}: invalid {field} field {value:?}")]
    InvalidSample {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// The input is missing a required column.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// Sample dates must be strictly ascending with no duplicates.
    #[error("sample {pos} is not strictly after its predecessor")]
    OutOfOrder { pos: usize },

    /// A configured time window resolved to zero samples. Surfaced at
    /// startup; not user-recoverable at runtime.
    #[error("window {label:?} resolves to zero samples")]
    EmptyWindow { label: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
