// File: crates/chart-core/tests/interpolate.rs
// Purpose: Validate that every interpolation passes through its anchors and flattens sensibly.

use scrollchart_core::interpolate::MAX_FLATTEN_STEPS;
use scrollchart_core::{Interpolation, PathSegment, Point};

fn zigzag() -> Vec<Point> {
    vec![
        Point::new(0.0, 50.0),
        Point::new(20.0, 10.0),
        Point::new(40.0, 70.0),
        Point::new(60.0, 30.0),
        Point::new(80.0, 40.0),
    ]
}

fn diagonal() -> Vec<Point> {
    (0..6).map(|i| Point::new(i as f64 * 10.0, i as f64 * 10.0)).collect()
}

fn all_modes() -> Vec<Interpolation> {
    vec![
        Interpolation::Linear,
        Interpolation::CatmullRom { alpha: 0.0 },
        Interpolation::CatmullRom { alpha: 0.5 },
        Interpolation::CatmullRom { alpha: 1.0 },
        Interpolation::Hermite,
        Interpolation::Cubic,
        Interpolation::Smoothed { smoothing: 0.3 },
    ]
}

fn close(a: Point, b: Point) -> bool { a.distance(b) < 1e-9 }

#[test]
fn every_mode_passes_through_input() {
    let input = zigzag();
    for mode in all_modes() {
        let path = mode.path(&input);
        assert_eq!(path.anchors(), input, "{}", mode.id());
        assert!(matches!(path.segments[0], PathSegment::MoveTo(_)));
    }
}

#[test]
fn flatten_samples_each_cubic() {
    let input = zigzag();
    let steps = 4;
    let flat = Interpolation::CatmullRom { alpha: 0.5 }.path(&input).flatten(steps);
    assert_eq!(flat.len(), 1 + (input.len() - 1) * steps);
    for (i, p) in input.iter().enumerate() {
        assert_eq!(flat[i * steps], *p);
    }
}

#[test]
fn flatten_step_count_is_capped() {
    let input = zigzag();
    let path = Interpolation::Hermite.path(&input);
    let flat = path.flatten(usize::MAX);
    assert_eq!(flat.len(), 1 + (input.len() - 1) * MAX_FLATTEN_STEPS);
    assert_eq!(path.flatten(0).len(), input.len());
}

#[test]
fn linear_flatten_is_the_input() {
    let input = zigzag();
    assert_eq!(Interpolation::Linear.path(&input).flatten(16), input);
}

#[test]
fn uniform_catmull_rom_control_point() {
    let input = zigzag();
    let path = Interpolation::CatmullRom { alpha: 0.0 }.path(&input);
    // segment 1 -> 2 is the third path element (after MoveTo and the first cubic)
    let PathSegment::CubicTo { c1, .. } = path.segments[2] else { panic!("expected cubic") };
    let want = input[1] + (input[2] - input[0]) * (1.0 / 6.0);
    assert!(close(c1, want), "{c1:?} vs {want:?}");
}

#[test]
fn hermite_and_cubic_keep_straight_lines_straight() {
    let input = diagonal();
    for mode in [Interpolation::Hermite, Interpolation::Cubic, Interpolation::CatmullRom { alpha: 0.0 }] {
        for p in mode.path(&input).flatten(10) {
            assert!((p.x - p.y).abs() < 1e-9, "{} drifted: {p:?}", mode.id());
        }
    }
}

#[test]
fn zero_smoothing_degenerates_to_segments() {
    let input = zigzag();
    let path = Interpolation::Smoothed { smoothing: 0.0 }.path(&input);
    let PathSegment::CubicTo { c1, c2, to } = path.segments[1] else { panic!("expected cubic") };
    assert_eq!(c1, input[0]);
    assert_eq!(c2, input[1]);
    assert_eq!(to, input[1]);
}

#[test]
fn short_inputs_use_straight_segments() {
    let two = vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
    let path = Interpolation::Cubic.path(&two);
    assert_eq!(path.segments, vec![PathSegment::MoveTo(two[0]), PathSegment::LineTo(two[1])]);
    assert!(Interpolation::Hermite.path(&[]).is_empty());
}
