// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for screen-space point math.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A screen-space coordinate. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point { Point::new(self.x * k, self.y * k) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Point::new(x, y) }
}

/// Distance from `p` to the infinite line through `a` and `b`.
/// Falls back to the distance to `a` when `a == b`.
pub fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mag = dx.hypot(dy);
    if mag < 1e-12 {
        return p.distance(a);
    }
    ((dy * p.x - dx * p.y + b.x * a.y - b.y * a.x) / mag).abs()
}

/// Unsigned area of the triangle `abc`.
#[inline]
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() * 0.5
}

/// Index of the point whose x is closest to `x`.
/// Relies on the x coordinates being sorted ascending, which scaled series guarantee.
pub fn nearest_index(points: &[Point], x: f64) -> Option<usize> {
    if points.is_empty() || x.is_nan() { return None; }
    let upper = points.partition_point(|p| p.x < x);
    if upper == 0 { return Some(0); }
    if upper == points.len() { return Some(points.len() - 1); }
    let lower = upper - 1;
    if (x - points[lower].x) <= (points[upper].x - x) { Some(lower) } else { Some(upper) }
}

