// File: crates/tideline-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round tick values covering `[start, stop]` with roughly `count` steps.
/// Step sizes are powers of ten times 1, 2, or 5, so axis labels land on
/// round numbers regardless of the domain.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !(stop > start) || count == 0 {
        return vec![start];
    }
    let step = tick_step(start, stop, count);
    let lo = (start / step).ceil();
    let hi = (stop / step).floor();
    let n = (hi - lo) as usize + 1;
    (0..n).map(|i| (lo + i as f64) * step).collect()
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let err = raw / base;
    if err >= 50f64.sqrt() {
        base * 10.0
    } else if err >= 10f64.sqrt() {
        base * 5.0
    } else if err >= 2f64.sqrt() {
        base * 2.0
    } else {
        base
    }
}
