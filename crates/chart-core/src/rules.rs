// File: crates/chart-core/src/rules.rs
// Summary: Horizontal rule marks (value, screen y, label) for the value axis.

use serde::{Deserialize, Serialize};

use crate::scale::PointScaler;
use crate::series::Range;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleMark {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Upper bound on rule marks per axis.
pub const MAX_RULES: usize = 64;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

const MAX_DECIMALS: usize = 6;

/// Fewest decimal places that print `step` exactly (up to six), so that
/// labels one step apart never round onto each other.
pub fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 { return 0; }
    (0..=MAX_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.max(1.0)
        })
        .unwrap_or(MAX_DECIMALS)
}

pub fn format_value(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    // "-0" and "-0.00" read oddly on an axis.
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') { s[1..].to_string() } else { s }
}

/// `count` evenly spaced rules from `range.min` (bottom) to `range.max` (top).
pub fn rule_marks(range: Range, scaler: &PointScaler, count: usize) -> Vec<RuleMark> {
    let values = linspace(range.min, range.max, count);
    let step = if values.len() > 1 { values[1] - values[0] } else { range.span() };
    let decimals = decimals_for_step(step);
    values
        .into_iter()
        .map(|value| RuleMark { value, y: scaler.y_for_value(value), label: format_value(value, decimals) })
        .collect()
}
