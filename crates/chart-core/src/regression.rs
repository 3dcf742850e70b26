// File: crates/chart-core/src/regression.rs
// Summary: Ordinary least squares over (index, value) and extrapolation of extra samples.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::finite_or_zero;

/// Upper bound on extrapolated samples per call.
pub const MAX_EXTRA_POINTS: usize = 1 << 20;

/// Fitted line `value = slope * index + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 1.0 when every sample sits on the line.
    pub r_squared: f64,
}

impl RegressionModel {
    /// Closed-form fit with the sample index as x. Needs at least two samples.
    pub fn fit(values: &[f64]) -> Result<Self> {
        let n = values.len();
        if n < 2 {
            return Err(ChartError::InsufficientSamples { needed: 2, got: n });
        }
        let nf = n as f64;
        let (mut sx, mut sy, mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for (i, &v) in values.iter().enumerate() {
            let x = i as f64;
            let y = finite_or_zero(v);
            sx += x;
            sy += y;
            sxx += x * x;
            sxy += x * y;
            syy += y * y;
        }
        let mean_x = sx / nf;
        let mean_y = sy / nf;
        let var_x = sxx / nf - mean_x * mean_x;
        let cov_xy = sxy / nf - mean_x * mean_y;
        let var_y = syy / nf - mean_y * mean_y;

        let slope = cov_xy / var_x;
        let intercept = mean_y - slope * mean_x;
        // A flat series is explained perfectly by a flat line.
        let r_squared = if var_y.abs() < 1e-12 { 1.0 } else { (cov_xy * cov_xy) / (var_x * var_y) };
        Ok(Self { slope, intercept, r_squared })
    }

    #[inline]
    pub fn predict(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }

    /// Fitted values at `start, start + 1, ..` (`count` of them).
    pub fn project(&self, start: usize, count: usize) -> Vec<f64> {
        (start..start.saturating_add(count)).map(|i| self.predict(i as f64)).collect()
    }
}

/// Original samples followed by `extra` points on the fitted line.
pub fn extrapolate(values: &[f64], extra: usize) -> Result<(Vec<f64>, RegressionModel)> {
    if extra > MAX_EXTRA_POINTS {
        return Err(ChartError::InvalidConfig { field: "extra_points", value: extra, max: MAX_EXTRA_POINTS });
    }
    let model = RegressionModel::fit(values)?;
    let mut out = Vec::with_capacity(values.len() + extra);
    out.extend_from_slice(values);
    out.extend(model.project(values.len(), extra));
    log::debug!(
        "regression slope={:.6} intercept={:.6} r2={:.4} (+{} points)",
        model.slope, model.intercept, model.r_squared, extra
    );
    Ok((out, model))
}
