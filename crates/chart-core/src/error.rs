// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the scaling, reduction and regression stages.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("series is empty")]
    EmptySeries,
    #[error("degenerate value range [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },
    #[error("drawing area {width}x{height} has no room left after insets")]
    InvalidSize { width: f64, height: f64 },
    #[error("group size must be at least 1")]
    InvalidGroupSize,
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("{field} = {value} exceeds the limit of {max}")]
    InvalidConfig { field: &'static str, value: usize, max: usize },
    #[error("regression needs at least {needed} samples, got {got}")]
    InsufficientSamples { needed: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, ChartError>;
