//! Tests for the exit orchestrator.

use lintmask_core::config::LintmaskConfig;
use lintmask_core::errors::StatusError;
use lintmask_core::Category;
use lintmask_enforcement::{decode, EnforcementPolicy, ExitOrchestrator, QualityGate};

fn orchestrator(exit_report: &str, threshold: f64) -> ExitOrchestrator {
    ExitOrchestrator::new(
        EnforcementPolicy::parse(exit_report).unwrap(),
        QualityGate::new(threshold).unwrap(),
    )
}

#[test]
fn test_quality_and_linter_codes_add_up() {
    let report = orchestrator("F,E,W,U", 6.0).evaluate(1, Some(5.0)).unwrap();
    assert_eq!(report.aggregation.exit_code, 1);
    assert_eq!(report.exit_code, 65);
    assert_eq!(report.blocking().as_slice(), &[Category::Fatal, Category::Quality]);
    assert_eq!(report.triggered().as_slice(), &[Category::Fatal, Category::Quality]);
}

#[test]
fn test_passing_score_contributes_nothing() {
    let report = ExitOrchestrator::default().evaluate(0, Some(8.0)).unwrap();
    assert_eq!(report.exit_code, 0);
    assert!(report.passed());
    assert!(!report.quality_failed());
    assert!(report.triggered().is_empty());
}

#[test]
fn test_without_score_the_gate_is_not_run() {
    let report = orchestrator("F,E,W,U", 9.0).evaluate(12, None).unwrap();
    assert_eq!(report.quality, None);
    assert_eq!(report.exit_code, 4);
}

#[test]
fn test_quality_only_failure() {
    let report = orchestrator("", 5.0).evaluate(31, Some(2.0)).unwrap();
    assert_eq!(report.aggregation.exit_code, 0);
    assert_eq!(report.exit_code, 64);
    assert_eq!(report.triggered().len(), 6);
    assert_eq!(report.blocking().as_slice(), &[Category::Quality]);
}

#[test]
fn test_final_code_stays_decodable() {
    let orch = orchestrator("F,E,W,R,C,U", 10.0);
    for raw in 0..64u64 {
        let report = orch.evaluate(raw, Some(1.0)).unwrap();
        assert_eq!(report.exit_code, raw + 64);
        assert_eq!(decode(report.exit_code), report.blocking());
    }
}

#[test]
fn test_non_finite_score_is_rejected() {
    let err = ExitOrchestrator::default()
        .evaluate(0, Some(f64::NAN))
        .unwrap_err();
    assert!(matches!(err, StatusError::NonFiniteScore(_)));
}

#[test]
fn test_from_config() {
    let config = LintmaskConfig::from_toml(
        r#"
[enforcement]
exit_report = "R"

[quality]
fail_under = 7.0
"#,
    )
    .unwrap();
    let orch = ExitOrchestrator::from_config(&config).unwrap();
    assert_eq!(orch.policy().to_exit_report(), "R");
    assert_eq!(orch.quality_gate().threshold(), 7.0);

    let report = orch.evaluate(8 | 4, Some(6.0)).unwrap();
    assert_eq!(report.exit_code, 8 + 64);
}
