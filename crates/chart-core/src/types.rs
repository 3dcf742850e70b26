// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (drawing size, insets).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Default drawing width in points.
pub const WIDTH: f64 = 320.0;
/// Default drawing height in points.
pub const HEIGHT: f64 = 240.0;

/// Target drawing size, in points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Margins around the plotted area.
/// Contract: all fields are finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Insets {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }
    /// Only vertical margins; x starts at 0.
    pub const fn vertical(top: f64, bottom: f64) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Width and height left for the series once margins are removed.
    pub fn inner(&self, size: Size) -> Result<Size> {
        let inner = Size::new(size.width - self.hsum(), size.height - self.vsum());
        if !(inner.width > 0.0 && inner.height > 0.0) || !inner.width.is_finite() || !inner.height.is_finite() {
            return Err(ChartError::InvalidSize { width: size.width, height: size.height });
        }
        Ok(inner)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::vertical(20.0, 20.0)
    }
}
