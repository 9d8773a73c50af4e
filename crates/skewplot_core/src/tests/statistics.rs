//! Tests for the derived statistics
//!
//! These tests verify the mode/median/mean relationships implied by the
//! first-order skew approximation.

use crate::model::{ParameterKind, Parameters, Statistics};

#[test]
fn test_unskewed_statistics_coincide() {
    let stats = Statistics::from_parameters(&Parameters::default());
    assert_eq!(stats.mode, 0.0);
    assert_eq!(stats.median, 0.0);
    assert_eq!(stats.mean, 0.0);
}

#[test]
fn test_negative_skew_example() {
    let stats = Statistics::from_parameters(&Parameters::new(1.0, 0.5, -1.0));
    assert_eq!(stats.mode, 1.5);
    assert_eq!(stats.median, 1.25);
    assert_eq!(stats.mean, 1.0);
}

#[test]
fn test_positive_skew_ordering() {
    let stats = Statistics::from_parameters(&Parameters::new(0.0, 1.0, 0.5));
    assert!(stats.mode < stats.median);
    assert!(stats.median < stats.mean);
}

#[test]
fn test_negative_skew_ordering() {
    let stats = Statistics::from_parameters(&Parameters::new(0.0, 1.0, -0.5));
    assert!(stats.mode > stats.median);
    assert!(stats.median > stats.mean);
}

#[test]
fn test_gap_identities_across_the_input_grid() {
    for m in 0..ParameterKind::MEAN_RANGE.grid_len() {
        for s in 0..ParameterKind::STD_DEV_RANGE.grid_len() {
            for k in 0..ParameterKind::SKEWNESS_RANGE.grid_len() {
                let params = Parameters::new(
                    ParameterKind::MEAN_RANGE.value_at(m),
                    ParameterKind::STD_DEV_RANGE.value_at(s),
                    ParameterKind::SKEWNESS_RANGE.value_at(k),
                );
                let stats = Statistics::from_parameters(&params);
                let half_shift = 0.5 * params.skewness * params.std_dev;

                assert!((stats.median - stats.mode - half_shift).abs() < 1e-12);
                assert!((stats.median - stats.mean + half_shift).abs() < 1e-12);
                assert_eq!(stats.mean, params.mean);
            }
        }
    }
}
