// File: crates/chart-core/tests/selection.rs
// Purpose: Validate nearest-point lookup used for selection and tooltips.

use scrollchart_core::{nearest_index, Point};

fn row() -> Vec<Point> {
    [0.0, 10.0, 20.0, 30.0].iter().map(|&x| Point::new(x, 0.0)).collect()
}

#[test]
fn picks_the_closest_x() {
    let pts = row();
    assert_eq!(nearest_index(&pts, 11.0), Some(1));
    assert_eq!(nearest_index(&pts, 16.0), Some(2));
    assert_eq!(nearest_index(&pts, 20.0), Some(2));
}

#[test]
fn ties_prefer_the_left_point() {
    assert_eq!(nearest_index(&row(), 15.0), Some(1));
}

#[test]
fn clamps_outside_the_series() {
    let pts = row();
    assert_eq!(nearest_index(&pts, -50.0), Some(0));
    assert_eq!(nearest_index(&pts, 500.0), Some(3));
}

#[test]
fn empty_or_nan_gives_none() {
    assert_eq!(nearest_index(&[], 3.0), None);
    assert_eq!(nearest_index(&row(), f64::NAN), None);
}
