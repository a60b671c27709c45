//! Configuration errors.

use super::error_code::{self, LintmaskErrorCode};

/// Errors raised while loading, validating or rendering a lintmask config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read lintmask config {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lintmask config {path} is not valid TOML: {message}")]
    Malformed { path: String, message: String },

    /// A setting parsed but its value is unusable, e.g. a malformed
    /// enforcement string or a non-finite threshold.
    #[error("Invalid setting {field}: {message}")]
    InvalidSetting { field: String, message: String },

    #[error("Cannot render lintmask config: {0}")]
    Render(#[from] toml::ser::Error),
}

impl LintmaskErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
