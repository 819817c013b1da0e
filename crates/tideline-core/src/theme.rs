// File: crates/tideline-core/src/theme.rs
// Summary: Light/Dark theming for chart scene colors.

use crate::types::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub crosshair: Rgba,
    pub price_line: Rgba,
    pub index_line: Rgba,
    pub legend_text: Rgba,
    pub tooltip_text: Rgba,
    pub control_selected: Rgba,
    pub control_unselected: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            crosshair: Rgba::rgb(255, 255, 255),
            price_line: Rgba::rgb(0, 255, 255),
            index_line: Rgba::rgb(255, 0, 0),
            legend_text: Rgba::rgb(235, 235, 245),
            tooltip_text: Rgba::rgb(235, 235, 245),
            control_selected: Rgba::rgb(0, 0, 255),
            control_unselected: Rgba::rgb(24, 32, 41),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            tick: Rgba::rgb(100, 100, 110),
            crosshair: Rgba::rgb(30, 30, 40),
            price_line: Rgba::rgb(0, 150, 150),
            index_line: Rgba::rgb(200, 40, 40),
            legend_text: Rgba::rgb(20, 20, 30),
            tooltip_text: Rgba::rgb(20, 20, 30),
            control_selected: Rgba::rgb(0, 0, 255),
            control_unselected: Rgba::rgb(200, 205, 212),
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
