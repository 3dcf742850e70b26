// File: crates/chart-core/src/aggregate.rs
// Summary: Fixed-size chunking of a series with pluggable reductions (mean, rms, sum, min, max).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::series::finite_or_zero;

/// Collapses one group of samples into a single value.
/// Groups handed to `reduce` are never empty.
pub trait Reducer {
    fn id(&self) -> &'static str;
    fn reduce(&self, group: &[f64]) -> f64;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    #[default]
    Mean,
    /// Root mean square.
    Rms,
    Sum,
    Min,
    Max,
}

impl Reducer for Reduction {
    fn id(&self) -> &'static str {
        match self {
            Reduction::Mean => "mean",
            Reduction::Rms => "rms",
            Reduction::Sum => "sum",
            Reduction::Min => "min",
            Reduction::Max => "max",
        }
    }

    fn reduce(&self, group: &[f64]) -> f64 {
        let n = group.len() as f64;
        let values = group.iter().copied().map(finite_or_zero);
        match self {
            Reduction::Mean => values.sum::<f64>() / n,
            Reduction::Rms => (values.map(|v| v * v).sum::<f64>() / n).sqrt(),
            Reduction::Sum => values.sum(),
            Reduction::Min => values.fold(f64::INFINITY, f64::min),
            Reduction::Max => values.fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

/// Reduce each contiguous group of `group_size` samples; the last group may be shorter.
pub fn chunk_values<R: Reducer + ?Sized>(values: &[f64], group_size: usize, reducer: &R) -> Result<Vec<f64>> {
    if group_size == 0 { return Err(ChartError::InvalidGroupSize); }
    Ok(values.chunks(group_size).map(|g| reducer.reduce(g)).collect())
}

/// Like [`chunk_values`], paired with each group's representative index
/// (the index of its first sample in `values`).
pub fn chunk_points<R: Reducer + ?Sized>(values: &[f64], group_size: usize, reducer: &R) -> Result<Vec<(usize, f64)>> {
    if group_size == 0 { return Err(ChartError::InvalidGroupSize); }
    let out = values
        .chunks(group_size)
        .enumerate()
        .map(|(i, g)| (i * group_size, reducer.reduce(g)))
        .collect();
    Ok(out)
}

/// Group size that brings `len` samples down to at most `target` groups.
pub fn group_size_for(len: usize, target: usize) -> usize {
    if target == 0 || len <= target { 1 } else { len.div_ceil(target) }
}
