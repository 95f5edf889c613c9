#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_history_gives_empty_series() {
    let series = LineSeries::from_entries::<String>(&[]);
    assert!(series.is_empty());
    assert!(series.labels.is_empty());
    assert_eq!(series.name, "Pneumonia Confidence");
}

#[test]
fn labels_are_one_indexed_in_entry_order() {
    assert_eq!(labels_for(3), vec!["Prediction 1", "Prediction 2", "Prediction 3"]);
}

#[test]
fn samples_follow_entries() {
    let series = LineSeries::from_entries(&["A (0.10)", "Positive (0.93)"]);
    assert_eq!(series.labels, vec!["Prediction 1", "Prediction 2"]);
    assert_eq!(series.samples, vec![0.10, 0.93]);
}

#[test]
fn unparseable_entry_is_zero_and_does_not_stop_later_entries() {
    let series = LineSeries::from_entries(&["Error", "NORMAL (0.80)", "PNEUMONIA (0.65)"]);
    assert_eq!(series.samples, vec![0.0, 0.80, 0.65]);
    assert_eq!(series.len(), 3);
}

#[test]
fn duplicates_are_kept() {
    let series = LineSeries::from_entries(&["X (0.5)", "X (0.5)"]);
    assert_eq!(series.samples, vec![0.5, 0.5]);
}

#[test]
fn points_pair_labels_with_samples() {
    let series = LineSeries::from_entries(&["A (0.25)", "B (0.75)"]);
    let points = series.points().collect::<Vec<_>>();
    assert_eq!(points, vec![("Prediction 1", 0.25), ("Prediction 2", 0.75)]);
}
