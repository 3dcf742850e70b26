// File: crates/chart-core/tests/aggregate.rs
// Purpose: Validate fixed-size chunking with built-in and custom reductions.

use scrollchart_core::aggregate::group_size_for;
use scrollchart_core::{chunk_points, chunk_values, ChartError, Reducer, Reduction};

const SAMPLES: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

#[test]
fn group_size_one_is_identity() {
    let values = vec![3.0, -1.5, 8.25, 0.0, 42.0];
    for r in [Reduction::Mean, Reduction::Sum, Reduction::Min, Reduction::Max] {
        assert_eq!(chunk_values(&values, 1, &r).expect("chunk"), values);
    }
}

#[test]
fn last_group_may_be_short() {
    assert_eq!(chunk_values(&SAMPLES, 2, &Reduction::Mean).unwrap(), vec![1.5, 3.5, 5.0]);
    assert_eq!(chunk_values(&SAMPLES, 2, &Reduction::Sum).unwrap(), vec![3.0, 7.0, 5.0]);
    assert_eq!(chunk_values(&SAMPLES, 2, &Reduction::Min).unwrap(), vec![1.0, 3.0, 5.0]);
    assert_eq!(chunk_values(&SAMPLES, 2, &Reduction::Max).unwrap(), vec![2.0, 4.0, 5.0]);
}

#[test]
fn rms_reduction() {
    let out = chunk_values(&[3.0, 4.0], 2, &Reduction::Rms).unwrap();
    assert!((out[0] - 12.5f64.sqrt()).abs() < 1e-12);
}

#[test]
fn points_carry_first_index_of_group() {
    let out = chunk_points(&SAMPLES, 2, &Reduction::Mean).unwrap();
    assert_eq!(out, vec![(0, 1.5), (2, 3.5), (4, 5.0)]);
}

#[test]
fn zero_group_size_is_an_error() {
    assert_eq!(chunk_values(&SAMPLES, 0, &Reduction::Mean).unwrap_err(), ChartError::InvalidGroupSize);
    assert_eq!(chunk_points(&SAMPLES, 0, &Reduction::Mean).unwrap_err(), ChartError::InvalidGroupSize);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(chunk_values(&[], 3, &Reduction::Rms).unwrap().is_empty());
}

struct Last;

impl Reducer for Last {
    fn id(&self) -> &'static str { "last" }
    fn reduce(&self, group: &[f64]) -> f64 { group[group.len() - 1] }
}

#[test]
fn custom_reducer_plugs_in() {
    assert_eq!(chunk_values(&SAMPLES, 3, &Last).unwrap(), vec![3.0, 5.0]);
    let dynamic: &dyn Reducer = &Last;
    assert_eq!(chunk_values(&SAMPLES, 2, dynamic).unwrap(), vec![2.0, 4.0, 5.0]);
}

#[test]
fn group_size_targets_point_budget() {
    assert_eq!(group_size_for(10, 3), 4);
    assert_eq!(group_size_for(10, 20), 1);
    assert_eq!(group_size_for(10, 0), 1);
}
