//! Tests for the quality gate.

use lintmask_core::config::QualityConfig;
use lintmask_enforcement::{check, QualityGate};

#[test]
fn test_score_below_threshold_fails() {
    assert_eq!(check(5.0, 6.0), 64);
}

#[test]
fn test_default_threshold_passes() {
    assert_eq!(check(8.0, 0.0), 0);
    let verdict = QualityGate::default().evaluate(8.0);
    assert!(verdict.passed);
    assert_eq!(verdict.contribution(), 0);
}

#[test]
fn test_score_equal_to_threshold_passes() {
    assert_eq!(check(7.5, 7.5), 0);
}

#[test]
fn test_no_upper_bound_is_assumed() {
    assert_eq!(check(42.0, 100.0), 64);
    assert_eq!(check(150.0, 100.0), 0);
}

#[test]
fn test_negative_scores() {
    // pylint can report negative ratings
    assert_eq!(check(-3.2, 0.0), 64);
}

#[test]
fn test_gate_from_config() {
    let gate = QualityGate::from_config(&QualityConfig {
        fail_under: Some(9.0),
    })
    .unwrap();
    assert_eq!(gate.threshold(), 9.0);

    let verdict = gate.evaluate(8.99);
    assert!(!verdict.passed);
    assert_eq!(verdict.contribution(), 64);
    assert_eq!(verdict.threshold, 9.0);
}

#[test]
fn test_non_finite_threshold_is_rejected() {
    assert!(QualityGate::new(f64::NAN).is_err());
    assert!(QualityGate::new(f64::INFINITY).is_err());
}
