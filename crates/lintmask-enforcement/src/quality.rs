//! Quality gate: a score below the threshold contributes the quality bit.

use serde::Serialize;

use lintmask_core::config::QualityConfig;
use lintmask_core::errors::ConfigError;
use lintmask_core::Category;

/// Exit contribution of `score` against `threshold`: the quality bit when
/// `score < threshold`, otherwise 0.
pub fn check(score: f64, threshold: f64) -> u64 {
    if score < threshold {
        Category::Quality.bit()
    } else {
        0
    }
}

/// Score threshold gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityGate {
    threshold: f64,
}

impl QualityGate {
    /// Create a gate. The threshold must be finite; no range is assumed.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() {
            return Err(ConfigError::InvalidSetting {
                field: "quality.fail_under".to_string(),
                message: format!("threshold must be a finite number, got {threshold}"),
            });
        }
        Ok(Self { threshold })
    }

    pub fn from_config(config: &QualityConfig) -> Result<Self, ConfigError> {
        Self::new(config.effective_fail_under())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compare a score against the threshold.
    pub fn evaluate(&self, score: f64) -> QualityVerdict {
        let passed = check(score, self.threshold) == 0;
        if !passed {
            tracing::warn!(
                score,
                threshold = self.threshold,
                "quality score is below the threshold"
            );
        }
        QualityVerdict {
            score,
            threshold: self.threshold,
            passed,
        }
    }
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            threshold: lintmask_core::constants::DEFAULT_FAIL_UNDER,
        }
    }
}

/// Outcome of one quality gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityVerdict {
    pub score: f64,
    pub threshold: f64,
    pub passed: bool,
}

impl QualityVerdict {
    /// The verdict's share of the exit code.
    pub fn contribution(&self) -> u64 {
        if self.passed {
            0
        } else {
            Category::Quality.bit()
        }
    }
}
