//! Top-level error for a lintmask invocation.

use super::error_code::LintmaskErrorCode;
use super::{ConfigError, ReportError, RunError, StatusError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LintmaskError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Status error: {0}")]
    Status(#[from] StatusError),

    #[error("Run error: {0}")]
    Run(#[from] RunError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl LintmaskErrorCode for LintmaskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Status(e) => e.error_code(),
            Self::Run(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
