//! Tests for the bundled curve snapshot

use crate::curve::generate_curve;
use crate::model::{Parameters, SkewCategory, Statistics};
use crate::snapshot::CurveSnapshot;

#[test]
fn test_snapshot_is_deterministic() {
    let params = Parameters::new(0.4, 1.1, 0.3);
    assert_eq!(CurveSnapshot::compute(&params), CurveSnapshot::compute(&params));
}

#[test]
fn test_snapshot_bundles_parts() {
    let params = Parameters::new(-1.0, 2.0, 0.2);
    let snapshot = CurveSnapshot::compute(&params);

    assert_eq!(snapshot.parameters, params);
    assert_eq!(snapshot.statistics, Statistics::from_parameters(&params));
    assert_eq!(snapshot.category, SkewCategory::Positive);
    assert_eq!(snapshot.samples, generate_curve(&params));
}

#[test]
fn test_y_range() {
    let snapshot = CurveSnapshot::compute(&Parameters::default());
    let (lo, hi) = snapshot.y_range();
    assert!(lo > 0.0);
    assert!((hi - snapshot.samples[40].y).abs() < 1e-15);
}

#[test]
fn test_snapshot_json_shape() {
    let snapshot = CurveSnapshot::compute(&Parameters::new(1.0, 0.5, -1.0));
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["category"], "negative");
    assert_eq!(value["statistics"]["mode"], 1.5);
    assert_eq!(value["parameters"]["std_dev"], 0.5);
    assert_eq!(value["samples"].as_array().map(|a| a.len()), Some(81));
    assert_eq!(value["samples"][0]["x"], -4.0);
}
