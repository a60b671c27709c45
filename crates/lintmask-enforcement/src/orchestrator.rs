//! Orchestrator: linter exit code plus quality gate contribution.

use serde::Serialize;

use lintmask_core::config::LintmaskConfig;
use lintmask_core::errors::{ConfigError, StatusError};
use lintmask_core::{Category, CategorySet};

use crate::aggregate::{aggregate, Aggregation};
use crate::decode::decode;
use crate::policy::EnforcementPolicy;
use crate::quality::{QualityGate, QualityVerdict};

/// Combines the enforcement policy and the quality gate for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExitOrchestrator {
    policy: EnforcementPolicy,
    quality_gate: QualityGate,
}

impl ExitOrchestrator {
    pub fn new(policy: EnforcementPolicy, quality_gate: QualityGate) -> Self {
        Self {
            policy,
            quality_gate,
        }
    }

    /// Build the policy and the gate from a resolved configuration.
    pub fn from_config(config: &LintmaskConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            EnforcementPolicy::from_config(&config.enforcement)?,
            QualityGate::from_config(&config.quality)?,
        ))
    }

    pub fn policy(&self) -> &EnforcementPolicy {
        &self.policy
    }

    pub fn quality_gate(&self) -> &QualityGate {
        &self.quality_gate
    }

    /// Aggregate `raw_status` and, when a score is given, run the quality gate.
    ///
    /// The final exit code is the sum of both contributions. Their bits are
    /// disjoint, so the sum still decodes to the blocking categories.
    pub fn evaluate(&self, raw_status: u64, score: Option<f64>) -> Result<ExitReport, StatusError> {
        if let Some(score) = score {
            if !score.is_finite() {
                return Err(StatusError::NonFiniteScore(score));
            }
        }

        let aggregation = aggregate(raw_status, &self.policy);
        let quality = score.map(|s| self.quality_gate.evaluate(s));
        let contribution = quality.map_or(0, |v| v.contribution());

        assert_eq!(
            aggregation.exit_code & contribution,
            0,
            "linter and quality exit codes must not share bits"
        );
        let exit_code = aggregation.exit_code + contribution;

        tracing::info!(
            raw_status,
            linter_exit_code = aggregation.exit_code,
            quality_contribution = contribution,
            exit_code,
            "exit code computed"
        );

        Ok(ExitReport {
            aggregation,
            quality,
            exit_code,
        })
    }
}

/// Everything a reporter needs about one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExitReport {
    pub aggregation: Aggregation,
    pub quality: Option<QualityVerdict>,
    /// Final process exit code.
    pub exit_code: u64,
}

impl ExitReport {
    pub fn raw_status(&self) -> u64 {
        self.aggregation.raw_status
    }

    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }

    /// Triggered linter categories, followed by the quality category when
    /// the gate failed.
    pub fn triggered(&self) -> CategorySet {
        let mut triggered = self.aggregation.triggered.clone();
        if self.quality_failed() {
            triggered.push(Category::Quality);
        }
        triggered
    }

    /// Categories behind a non-zero exit code: `decode(exit_code)`.
    pub fn blocking(&self) -> CategorySet {
        decode(self.exit_code)
    }

    pub fn quality_failed(&self) -> bool {
        self.quality.is_some_and(|v| !v.passed)
    }
}
