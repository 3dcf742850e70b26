// File: crates/chart-core/tests/rules.rs
// Purpose: Validate rule mark placement, label precision and range union.

use scrollchart_core::rules::{decimals_for_step, format_value};
use scrollchart_core::{rule_marks, Insets, PointScaler, Range, Size};

fn labels(range: Range, count: usize) -> Vec<String> {
    let scaler = PointScaler::new(Size::new(200.0, 120.0), Insets::vertical(10.0, 10.0), range, 10).expect("scaler");
    rule_marks(range, &scaler, count).into_iter().map(|r| r.label).collect()
}

#[test]
fn fractional_steps_above_one_keep_decimals() {
    assert_eq!(labels(Range::new(0.0, 10.0), 5), vec!["0.0", "2.5", "5.0", "7.5", "10.0"]);
}

#[test]
fn whole_steps_print_integers() {
    assert_eq!(labels(Range::new(0.0, 8.0), 5), vec!["0", "2", "4", "6", "8"]);
}

#[test]
fn small_steps_get_enough_places() {
    assert_eq!(decimals_for_step(0.25), 2);
    assert_eq!(decimals_for_step(0.1), 1);
    assert_eq!(decimals_for_step(2.5), 1);
    assert_eq!(decimals_for_step(40.0), 0);
    assert_eq!(decimals_for_step(1.0 / 3.0), 6);
    assert_eq!(decimals_for_step(0.0), 0);
}

#[test]
fn negative_zero_label_drops_sign() {
    assert_eq!(format_value(-0.0001, 2), "0.00");
    assert_eq!(format_value(-1.5, 1), "-1.5");
}

#[test]
fn rules_run_from_bottom_to_top() {
    let range = Range::new(-4.0, 4.0);
    let scaler = PointScaler::new(Size::new(200.0, 120.0), Insets::vertical(10.0, 10.0), range, 10).expect("scaler");
    let marks = rule_marks(range, &scaler, 3);
    let ys: Vec<f64> = marks.iter().map(|m| m.y).collect();
    assert_eq!(ys, vec![110.0, 60.0, 10.0]);
}

#[test]
fn union_spans_both_ranges() {
    let a = Range::new(-2.0, 3.0);
    let b = Range::new(1.0, 9.0);
    assert_eq!(a.union(&b), Range::new(-2.0, 9.0));
    assert_eq!(b.union(&a), Range::new(-2.0, 9.0));
    assert_eq!(a.union(&a), a);
}
