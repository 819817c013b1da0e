// File: crates/tideline-core/src/loader.rs
// Summary: CSV loader producing a validated Series from the composite dataset.

use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::ChartError;
use crate::series::{Sample, Series};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Load a series from a CSV file on disk.
pub fn load_series(path: impl AsRef<Path>) -> Result<Series, ChartError> {
    let file = std::fs::File::open(path)?;
    read_series(file)
}

/// Load a series from any reader. The first row must be a header; the date
/// column is matched by name and the first two remaining columns are taken
/// as the price and index metrics, so both `date,price,index` and
/// `week,bitcoin,ethereum` shaped files parse.
pub fn read_series<R: io::Read>(input: R) -> Result<Series, ChartError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let date_col = headers
        .iter()
        .position(|h| matches!(h.as_str(), "date" | "week" | "day" | "time"))
        .ok_or(ChartError::MissingColumn("date"))?;
    let mut metrics = (0..headers.len()).filter(|&i| i != date_col);
    let price_col = metrics.next().ok_or(ChartError::MissingColumn("price"))?;
    let index_col = metrics.next().ok_or(ChartError::MissingColumn("index"))?;

    let mut samples = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // Header occupies line 1.
        let line = row as u64 + 2;
        let date = parse_date(&rec, date_col, line)?;
        let price = parse_value(&rec, price_col, "price", line)?;
        let index = parse_value(&rec, index_col, "index", line)?;
        samples.push(Sample::new(date, price, index));
    }

    Series::try_new(samples)
}

fn parse_date(rec: &csv::StringRecord, col: usize, line: u64) -> Result<NaiveDate, ChartError> {
    let raw = rec.get(col).unwrap_or("").trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ChartError::InvalidSample {
        line,
        field: "date",
        value: raw.to_string(),
    })
}

fn parse_value(
    rec: &csv::StringRecord,
    col: usize,
    field: &'static str,
    line: u64,
) -> Result<f64, ChartError> {
    let raw = rec.get(col).unwrap_or("").trim();
    let v: f64 = raw.parse().map_err(|_| ChartError::InvalidSample {
        line,
        field,
        value: raw.to_string(),
    })?;
    if !v.is_finite() {
        return Err(ChartError::InvalidSample { line, field, value: raw.to_string() });
    }
    Ok(v)
}
