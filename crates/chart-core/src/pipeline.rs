// File: crates/chart-core/src/pipeline.rs
// Summary: End-to-end polyline generation: sanitize, aggregate, extrapolate, scale, simplify, interpolate.

use serde::{Deserialize, Serialize};

use crate::aggregate::{chunk_values, group_size_for, Reduction};
use crate::error::{ChartError, Result};
use crate::geometry::{nearest_index, Point};
use crate::interpolate::{Interpolation, Path, MAX_FLATTEN_STEPS};
use crate::regression::{extrapolate, RegressionModel, MAX_EXTRA_POINTS};
use crate::rules::{rule_marks, RuleMark, MAX_RULES};
use crate::scale::PointScaler;
use crate::series::{Range, Series};
use crate::simplify::SimplifyStrategy;
use crate::types::{Insets, Size};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    pub group_size: usize,
    #[serde(default)]
    pub reduction: Reduction,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionConfig {
    pub extra_points: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifyConfig {
    #[serde(default)]
    pub strategy: SimplifyStrategy,
    pub tolerance: f64,
}

/// Everything needed to turn a series into screen geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub size: Size,
    pub insets: Insets,
    /// Pinned normalisation range; computed from the data when absent.
    pub range: Option<Range>,
    pub aggregation: Option<AggregationConfig>,
    pub regression: Option<RegressionConfig>,
    pub simplify: Option<SimplifyConfig>,
    pub interpolation: Interpolation,
    /// Samples per cubic segment when flattening the path.
    pub flatten_steps: usize,
    /// Number of horizontal rule marks.
    pub rules: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            size: Size::default(),
            insets: Insets::default(),
            range: None,
            aggregation: None,
            regression: None,
            simplify: None,
            interpolation: Interpolation::Linear,
            flatten_steps: 8,
            rules: 5,
        }
    }
}

impl PipelineConfig {
    /// Mean-aggregate series longer than `target` samples down to at most
    /// `target` points. An explicit aggregation is left untouched.
    pub fn with_point_budget(mut self, len: usize, target: usize) -> Self {
        if self.aggregation.is_none() && target > 0 && len > target {
            let group_size = group_size_for(len, target);
            self.aggregation = Some(AggregationConfig { group_size, reduction: Reduction::Mean });
        }
        self
    }

    /// Rejects sizes that would make a run overflow or allocate without bound.
    pub fn validate(&self) -> Result<()> {
        if self.flatten_steps > MAX_FLATTEN_STEPS {
            return Err(ChartError::InvalidConfig { field: "flatten_steps", value: self.flatten_steps, max: MAX_FLATTEN_STEPS });
        }
        if self.rules > MAX_RULES {
            return Err(ChartError::InvalidConfig { field: "rules", value: self.rules, max: MAX_RULES });
        }
        if let Some(reg) = self.regression {
            if reg.extra_points > MAX_EXTRA_POINTS {
                return Err(ChartError::InvalidConfig { field: "extra_points", value: reg.extra_points, max: MAX_EXTRA_POINTS });
            }
        }
        Ok(())
    }
}

/// Output of one pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Values actually scaled (after aggregation and extrapolation).
    pub values: Vec<f64>,
    /// Samples at and after this index came from the regression line.
    pub projected_from: Option<usize>,
    pub range: Range,
    pub model: Option<RegressionModel>,
    /// One point per value.
    pub points: Vec<Point>,
    /// `points` after simplification (a clone when disabled).
    pub simplified: Vec<Point>,
    pub path: Path,
    pub flattened: Vec<Point>,
    pub rules: Vec<RuleMark>,
}

impl Polyline {
    /// Index into `simplified` nearest to a screen x, for selection and tooltips.
    pub fn select(&self, x: f64) -> Option<(usize, Point)> {
        nearest_index(&self.simplified, x).map(|i| (i, self.simplified[i]))
    }
}

pub struct Pipeline {
    pub config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, series: &Series) -> Result<Polyline> {
        let cfg = &self.config;
        cfg.validate()?;
        let bad = series.non_finite_count();
        if bad > 0 {
            log::warn!("{} non-finite sample(s) in {:?} replaced by 0", bad, series.name.as_deref().unwrap_or("series"));
        }
        let mut values = series.sanitized().values;

        if let Some(agg) = cfg.aggregation {
            let before = values.len();
            values = chunk_values(&values, agg.group_size, &agg.reduction)?;
            log::debug!("aggregate[{:?}] group={} {} -> {} values", agg.reduction, agg.group_size, before, values.len());
        }

        let observed = values.len();
        let mut model = None;
        let mut projected_from = None;
        if let Some(reg) = cfg.regression {
            let (extended, m) = extrapolate(&values, reg.extra_points)?;
            values = extended;
            model = Some(m);
            if reg.extra_points > 0 { projected_from = Some(observed); }
        }

        let range = match cfg.range {
            Some(pinned) => pinned,
            None => {
                let (seen, tail) = values.split_at(observed);
                let base = Range::of(seen)?;
                if tail.is_empty() { base } else { base.union(&Range::of(tail)?) }
            }
        };
        let scaler = PointScaler::new(cfg.size, cfg.insets, range, values.len())?;
        let points = scaler.scale(&values);
        log::debug!("scale {} values into {:?} range=[{}, {}]", values.len(), cfg.size, range.min, range.max);

        let simplified = match cfg.simplify {
            Some(s) => s.strategy.apply(&points, s.tolerance)?,
            None => points.clone(),
        };

        let path = cfg.interpolation.path(&simplified);
        let flattened = path.flatten(cfg.flatten_steps);
        log::debug!("interpolate[{}] {} anchors -> {} flattened points", cfg.interpolation.id(), simplified.len(), flattened.len());

        let rules = rule_marks(range, &scaler, cfg.rules);

        Ok(Polyline { values, projected_from, range, model, points, simplified, path, flattened, rules })
    }
}
