// File: crates/tideline-core/src/format.rs
// Summary: Date and value formatting for ticks and the tooltip.

use chrono::{Datelike, NaiveDate};

/// Short month names as shown in tooltips and tick labels.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Tooltip form: "Sept 3, 2017".
pub fn tooltip_date(d: NaiveDate) -> String {
    format!("{} {}, {}", MONTHS[d.month0() as usize], d.day(), d.year())
}

/// Axis tick form: "Sept 2017".
pub fn tick_date(d: NaiveDate) -> String {
    format!("{} {}", MONTHS[d.month0() as usize], d.year())
}

/// Compact numeric label: integers print bare, everything else keeps two
/// decimals.
pub fn tick_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.2}", v)
    }
}
