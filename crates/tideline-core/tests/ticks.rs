// File: crates/tideline-core/tests/ticks.rs
// Purpose: Validate tick generation and label formatting.

use chrono::NaiveDate;
use tideline_core::format::{tick_date, tick_value, tooltip_date};
use tideline_core::grid::{linspace, nice_ticks};

#[test]
fn linspace_covers_endpoints_evenly() {
    assert_eq!(linspace(0.0, 10.0, 5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
}

#[test]
fn linspace_degenerate_step_count() {
    assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
}

#[test]
fn nice_ticks_land_on_round_steps() {
    assert_eq!(nice_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
}

#[test]
fn nice_ticks_stay_inside_the_domain() {
    let ticks = nice_ticks(87.0, 143.0, 5);
    assert_eq!(ticks, vec![90.0, 100.0, 110.0, 120.0, 130.0, 140.0]);
    for t in ticks {
        assert!(t >= 87.0 && t <= 143.0);
    }
}

#[test]
fn nice_ticks_empty_domain_collapses() {
    assert_eq!(nice_ticks(5.0, 5.0, 5), vec![5.0]);
}

#[test]
fn date_formats_use_short_month_names() {
    let d = NaiveDate::from_ymd_opt(2017, 9, 3).unwrap();
    assert_eq!(tooltip_date(d), "Sept 3, 2017");
    assert_eq!(tick_date(d), "Sept 2017");

    let d = NaiveDate::from_ymd_opt(2018, 1, 21).unwrap();
    assert_eq!(tooltip_date(d), "Jan 21, 2018");
}

#[test]
fn tick_values_print_integers_bare() {
    assert_eq!(tick_value(100.0), "100");
    assert_eq!(tick_value(0.0), "0");
    assert_eq!(tick_value(97.25), "97.25");
    assert_eq!(tick_value(3.5), "3.50");
}
