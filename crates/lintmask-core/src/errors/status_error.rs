//! Errors for status values and scores rejected at the boundary.

use super::error_code::{self, LintmaskErrorCode};

/// A raw status or quality score that cannot reach the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Linter status must be non-negative, got {0}")]
    NegativeStatus(i64),

    #[error("Quality score must be a finite number, got {0}")]
    NonFiniteScore(f64),

    #[error("No quality score found in linter output (threshold {threshold})")]
    MissingScore { threshold: f64 },
}

impl LintmaskErrorCode for StatusError {
    fn error_code(&self) -> &'static str {
        error_code::STATUS_ERROR
    }
}
