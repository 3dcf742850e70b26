// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the polyline scaling and point-reduction API.

pub mod error;
pub mod types;
pub mod geometry;
pub mod series;
pub mod scale;
pub mod simplify;
pub mod aggregate;
pub mod regression;
pub mod interpolate;
pub mod rules;
pub mod pipeline;

pub use error::{ChartError, Result};
pub use types::{Insets, Size};
pub use geometry::{nearest_index, Point};
pub use series::{Range, Series};
pub use scale::{scale_points, PointScaler};
pub use simplify::{douglas_peucker, douglas_peucker_radial, radial_distance, visvalingam_whyatt, SimplifyStrategy};
pub use aggregate::{chunk_points, chunk_values, Reducer, Reduction};
pub use regression::{extrapolate, RegressionModel};
pub use interpolate::{Interpolation, Path, PathSegment};
pub use rules::{rule_marks, RuleMark};
pub use pipeline::{Pipeline, PipelineConfig, Polyline};
