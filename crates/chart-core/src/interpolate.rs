// File: crates/chart-core/src/interpolate.rs
// Summary: Curve construction through scaled points (linear, Catmull-Rom, Hermite, cubic spline, smoothed bezier).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Upper bound on samples per cubic segment in [`Path::flatten`].
pub const MAX_FLATTEN_STEPS: usize = 1024;

/// How consecutive points are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interpolation {
    /// Straight segments.
    #[default]
    Linear,
    /// Catmull-Rom spline parameterised by `alpha`:
    /// 0.0 uniform, 0.5 centripetal, 1.0 chordal.
    CatmullRom { alpha: f64 },
    /// Cubic Hermite with finite-difference tangents.
    Hermite,
    /// C2-continuous cubic bezier spline (natural end conditions).
    Cubic,
    /// Bezier whose control points follow the neighbours' direction, scaled by `smoothing`.
    Smoothed { smoothing: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

/// Renderer-agnostic path, shaped after a 2D canvas path builder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) { self.segments.push(PathSegment::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.segments.push(PathSegment::LineTo(p)); }
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.segments.push(PathSegment::CubicTo { c1, c2, to });
    }

    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// End point of every segment, in order.
    pub fn anchors(&self) -> Vec<Point> {
        self.segments
            .iter()
            .map(|s| match *s {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => p,
                PathSegment::CubicTo { to, .. } => to,
            })
            .collect()
    }

    /// Sample the path into a polyline; each cubic contributes `steps` points.
    /// `steps` is clamped to `1..=MAX_FLATTEN_STEPS`.
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.clamp(1, MAX_FLATTEN_STEPS);
        let mut out = Vec::with_capacity(self.segments.len().saturating_mul(steps));
        let mut cursor = Point::default();
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    out.push(p);
                    cursor = p;
                }
                PathSegment::CubicTo { c1, c2, to } => {
                    for k in 1..steps {
                        out.push(cubic_point(cursor, c1, c2, to, k as f64 / steps as f64));
                    }
                    out.push(to);
                    cursor = to;
                }
            }
        }
        out
    }
}

/// Point on the cubic bezier `p0 c1 c2 p3` at parameter `t`.
#[inline]
pub fn cubic_point(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

impl Interpolation {
    pub fn id(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::CatmullRom { .. } => "catmull_rom",
            Interpolation::Hermite => "hermite",
            Interpolation::Cubic => "cubic",
            Interpolation::Smoothed { .. } => "smoothed",
        }
    }

    /// Build a path through every point. Fewer than three points always
    /// produce straight segments.
    pub fn path(&self, points: &[Point]) -> Path {
        let mut path = Path::new();
        let Some(&first) = points.first() else { return path };
        path.move_to(first);
        if points.len() < 3 {
            for &p in &points[1..] { path.line_to(p); }
            return path;
        }
        match *self {
            Interpolation::Linear => {
                for &p in &points[1..] { path.line_to(p); }
            }
            Interpolation::CatmullRom { alpha } => catmull_rom(&mut path, points, alpha),
            Interpolation::Hermite => hermite(&mut path, points),
            Interpolation::Cubic => cubic_spline(&mut path, points),
            Interpolation::Smoothed { smoothing } => smoothed(&mut path, points, smoothing),
        }
        path
    }
}

fn catmull_rom(path: &mut Path, points: &[Point], alpha: f64) {
    const EPS: f64 = 1e-6;
    let n = points.len();
    for i in 0..n - 1 {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < n { points[i + 2] } else { p2 };

        let d1 = p1.distance(p0);
        let d2 = p2.distance(p1);
        let d3 = p3.distance(p2);

        let d1a = d1.powf(alpha);
        let d2a = d2.powf(alpha);
        let d3a = d3.powf(alpha);
        let d1_2a = d1.powf(2.0 * alpha);
        let d2_2a = d2.powf(2.0 * alpha);
        let d3_2a = d3.powf(2.0 * alpha);

        let c1 = if d1 < EPS {
            p1
        } else {
            (p2 * d1_2a - p0 * d2_2a + p1 * (2.0 * d1_2a + 3.0 * d1a * d2a + d2_2a)) * (1.0 / (3.0 * d1a * (d1a + d2a)))
        };
        let c2 = if d3 < EPS {
            p2
        } else {
            (p1 * d3_2a - p3 * d2_2a + p2 * (2.0 * d3_2a + 3.0 * d3a * d2a + d2_2a)) * (1.0 / (3.0 * d3a * (d3a + d2a)))
        };
        path.cubic_to(c1, c2, p2);
    }
}

fn hermite(path: &mut Path, points: &[Point]) {
    let n = points.len();
    // One-sided differences at the ends, central differences inside.
    let tangent = |i: usize| -> Point {
        if i == 0 {
            (points[1] - points[0]) * 0.5
        } else if i == n - 1 {
            (points[n - 1] - points[n - 2]) * 0.5
        } else {
            (points[i + 1] - points[i - 1]) * 0.5
        }
    };
    for i in 0..n - 1 {
        let c1 = points[i] + tangent(i) * (1.0 / 3.0);
        let c2 = points[i + 1] - tangent(i + 1) * (1.0 / 3.0);
        path.cubic_to(c1, c2, points[i + 1]);
    }
}

fn cubic_spline(path: &mut Path, points: &[Point]) {
    let n = points.len() - 1;
    // rhs of the tridiagonal system for the first control points
    let mut rhs = vec![Point::default(); n];
    rhs[0] = points[0] + points[1] * 2.0;
    for i in 1..n - 1 {
        rhs[i] = points[i] * 4.0 + points[i + 1] * 2.0;
    }
    rhs[n - 1] = (points[n - 1] * 8.0 + points[n]) * 0.5;

    // Thomas algorithm; x and y share the same coefficients.
    let mut first = vec![Point::default(); n];
    let mut tmp = vec![0.0f64; n];
    let mut b = 2.0;
    first[0] = rhs[0] * (1.0 / b);
    for i in 1..n {
        tmp[i] = 1.0 / b;
        b = (if i < n - 1 { 4.0 } else { 3.5 }) - tmp[i];
        first[i] = (rhs[i] - first[i - 1]) * (1.0 / b);
    }
    for i in 1..n {
        first[n - i - 1] = first[n - i - 1] - first[n - i] * tmp[n - i];
    }

    for i in 0..n {
        let c2 = if i < n - 1 {
            points[i + 1] * 2.0 - first[i + 1]
        } else {
            (points[n] + first[n - 1]) * 0.5
        };
        path.cubic_to(first[i], c2, points[i + 1]);
    }
}

fn smoothed(path: &mut Path, points: &[Point], smoothing: f64) {
    let n = points.len();
    for i in 0..n - 1 {
        let prev = if i == 0 { points[i] } else { points[i - 1] };
        let cur = points[i];
        let next = points[i + 1];
        let after = if i + 2 < n { points[i + 2] } else { next };
        let c1 = cur + (next - prev) * smoothing;
        let c2 = next - (after - cur) * smoothing;
        path.cubic_to(c1, c2, next);
    }
}
