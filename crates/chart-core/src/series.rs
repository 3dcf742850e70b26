// File: crates/chart-core/src/series.rs
// Summary: Series model (ordered samples) and the value range that normalises them.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Ordered samples; position in the vector is the x order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { name: None, values }
    }

    pub fn named(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self { name: Some(name.into()), values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Number of samples that are NaN or infinite.
    pub fn non_finite_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }

    /// Copy with every non-finite sample replaced by `0.0`.
    pub fn sanitized(&self) -> Self {
        Self { name: self.name.clone(), values: sanitize(&self.values) }
    }

    /// Range spanned by the (sanitized) samples.
    pub fn range(&self) -> Result<Range> {
        Range::of(&self.values)
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Series::new(values) }
}

/// Non-finite samples count as zero everywhere in the pipeline.
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

pub fn sanitize(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(finite_or_zero).collect()
}

/// Closed value interval used for normalisation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Pinned range. No validation happens here; see [`Range::validate`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Minimum and maximum of `values`, non-finite samples read as zero.
    pub fn of(values: &[f64]) -> Result<Self> {
        if values.is_empty() { return Err(ChartError::EmptySeries); }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            let v = finite_or_zero(v);
            min = min.min(v);
            max = max.max(v);
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    /// Rejects ranges that would divide by zero (or by a non-finite span).
    pub fn validate(&self) -> Result<()> {
        let span = self.span();
        if !span.is_finite() || span == 0.0 {
            return Err(ChartError::DegenerateRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Maps `v` onto [0, 1] (outside when `v` lies outside the range).
    #[inline]
    pub fn normalize(&self, v: f64) -> f64 {
        (finite_or_zero(v) - self.min) * (1.0 / self.span())
    }

    #[inline]
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * self.span()
    }

    pub fn union(&self, other: &Range) -> Range {
        Range::new(self.min.min(other.min), self.max.max(other.max))
    }
}
