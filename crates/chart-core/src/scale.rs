// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) transforms from samples into screen space.

use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::series::{finite_or_zero, Range};
use crate::types::{Insets, Size};

/// Maps sample indices and values into a drawing area.
///
/// X advances by `inner_width / count` per sample starting at the left inset.
/// Y is inverted: `range.max` lands on the top inset and `range.min` on the
/// bottom edge of the inner area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScaler {
    pub left_px: f64,
    pub top_px: f64,
    pub inner: Size,
    pub step_x: f64,
    pub range: Range,
}

impl PointScaler {
    /// Resolve the geometry for `count` samples. Fails on zero samples,
    /// a degenerate range, or insets that leave no room.
    pub fn new(size: Size, insets: Insets, range: Range, count: usize) -> Result<Self> {
        if count == 0 { return Err(ChartError::EmptySeries); }
        range.validate()?;
        let inner = insets.inner(size)?;
        Ok(Self {
            left_px: insets.left,
            top_px: insets.top,
            inner,
            step_x: inner.width / count as f64,
            range,
        })
    }

    #[inline]
    pub fn x_for_index(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.step_x
    }

    #[inline]
    pub fn y_for_value(&self, v: f64) -> f64 {
        self.inner.height * (1.0 - self.range.normalize(v)) + self.top_px
    }

    /// Inverse of [`PointScaler::y_for_value`].
    #[inline]
    pub fn value_for_y(&self, py: f64) -> f64 {
        self.range.denormalize(1.0 - (py - self.top_px) / self.inner.height)
    }

    /// Fractional sample index under a screen x.
    #[inline]
    pub fn index_for_x(&self, px: f64) -> f64 {
        (px - self.left_px) / self.step_x
    }

    #[inline]
    pub fn point(&self, index: usize, v: f64) -> Point {
        Point::new(self.x_for_index(index), self.y_for_value(v))
    }

    pub fn scale(&self, values: &[f64]) -> Vec<Point> {
        values.iter().enumerate().map(|(i, &v)| self.point(i, finite_or_zero(v))).collect()
    }
}

/// One screen point per sample. `range` pins normalisation; pass `None` to
/// use the data's own minimum and maximum.
pub fn scale_points(values: &[f64], size: Size, insets: Insets, range: Option<Range>) -> Result<Vec<Point>> {
    let range = match range {
        Some(r) => r,
        None => Range::of(values)?,
    };
    let scaler = PointScaler::new(size, insets, range, values.len())?;
    Ok(scaler.scale(values))
}
