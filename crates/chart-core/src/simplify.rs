// File: crates/chart-core/src/simplify.rs
// Summary: Tolerance-driven polyline reduction (Douglas-Peucker, radial distance, Visvalingam-Whyatt).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::geometry::{perpendicular_distance, triangle_area, Point};

/// Selects a reduction algorithm at run time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimplifyStrategy {
    /// Perpendicular distance to the chord of the retained neighbours.
    #[default]
    DouglasPeucker,
    /// Radial-distance pre-pass followed by Douglas-Peucker.
    DouglasPeuckerRadial,
    /// Drop points closer than the tolerance to the previous kept point.
    RadialDistance,
    /// Smallest effective triangle first, areas compared with `tolerance²`.
    VisvalingamWhyatt,
}

impl SimplifyStrategy {
    pub fn id(&self) -> &'static str {
        match self {
            SimplifyStrategy::DouglasPeucker => "douglas_peucker",
            SimplifyStrategy::DouglasPeuckerRadial => "douglas_peucker_radial",
            SimplifyStrategy::RadialDistance => "radial_distance",
            SimplifyStrategy::VisvalingamWhyatt => "visvalingam_whyatt",
        }
    }

    pub fn apply(&self, points: &[Point], tolerance: f64) -> Result<Vec<Point>> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ChartError::InvalidTolerance(tolerance));
        }
        let out = match self {
            SimplifyStrategy::DouglasPeucker => douglas_peucker(points, tolerance),
            SimplifyStrategy::DouglasPeuckerRadial => douglas_peucker_radial(points, tolerance),
            SimplifyStrategy::RadialDistance => radial_distance(points, tolerance),
            SimplifyStrategy::VisvalingamWhyatt => visvalingam_whyatt(points, tolerance),
        };
        log::debug!("simplify[{}] tolerance={} {} -> {} points", self.id(), tolerance, points.len(), out.len());
        Ok(out)
    }
}

/// Keeps every point farther than `tolerance` from the chord joining the
/// retained neighbours. Endpoints are always kept.
pub fn douglas_peucker(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 { return points.to_vec(); }
    let tolerance = tolerance.max(0.0);

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit stack instead of recursion; long series would otherwise blow the call stack.
    let mut stack = vec![(0usize, n - 1)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 { continue; }
        let mut max_dist = 0.0f64;
        let mut max_idx = first;
        for (i, &p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d = perpendicular_distance(p, points[first], points[last]);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > tolerance {
            keep[max_idx] = true;
            stack.push((first, max_idx));
            stack.push((max_idx, last));
        }
    }

    points.iter().zip(keep).filter_map(|(&p, k)| k.then_some(p)).collect()
}

/// Sequential filter: a point survives only if it lies more than `tolerance`
/// away from the last survivor. The final point is always appended.
pub fn radial_distance(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 { return points.to_vec(); }
    let tol_sq = tolerance.max(0.0).powi(2);

    let mut out = Vec::with_capacity(n);
    let mut prev = points[0];
    out.push(prev);
    for &p in &points[1..n - 1] {
        if p.distance_sq(prev) > tol_sq {
            out.push(p);
            prev = p;
        }
    }
    out.push(points[n - 1]);
    out
}

pub fn douglas_peucker_radial(points: &[Point], tolerance: f64) -> Vec<Point> {
    douglas_peucker(&radial_distance(points, tolerance), tolerance)
}

/// Heap entry for Visvalingam-Whyatt; ordered so the smallest area pops first,
/// ties broken by the lower index.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    area: f64,
    index: usize,
    version: u32,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.area.total_cmp(&self.area).then_with(|| other.index.cmp(&self.index))
    }
}

/// Removes the point with the smallest triangle (formed with its live
/// neighbours) until every remaining triangle has area ≥ `tolerance²`.
/// At least the two endpoints always survive.
pub fn visvalingam_whyatt(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 { return points.to_vec(); }
    let threshold = tolerance.max(0.0).powi(2);

    let mut prev: Vec<usize> = (0..n).map(|i| i.saturating_sub(1)).collect();
    let mut next: Vec<usize> = (0..n).map(|i| (i + 1).min(n - 1)).collect();
    let mut alive = vec![true; n];
    let mut version = vec![0u32; n];

    let mut heap = BinaryHeap::with_capacity(n);
    for i in 1..n - 1 {
        let area = triangle_area(points[i - 1], points[i], points[i + 1]);
        heap.push(Candidate { area, index: i, version: 0 });
    }

    let mut remaining = n;
    while let Some(c) = heap.pop() {
        if !alive[c.index] || c.version != version[c.index] { continue; }
        if c.area >= threshold || remaining <= 2 { break; }

        alive[c.index] = false;
        remaining -= 1;
        let (p, q) = (prev[c.index], next[c.index]);
        next[p] = q;
        prev[q] = p;

        for j in [p, q] {
            if j == 0 || j == n - 1 { continue; }
            version[j] += 1;
            let area = triangle_area(points[prev[j]], points[j], points[next[j]]);
            heap.push(Candidate { area, index: j, version: version[j] });
        }
    }

    points.iter().zip(alive).filter_map(|(&p, a)| a.then_some(p)).collect()
}
