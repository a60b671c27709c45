//! Linter invocation errors.

use super::error_code::{self, LintmaskErrorCode};

/// Errors that can occur while running the linter as a child process.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("No linter command given")]
    EmptyCommand,

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading linter output: {0}")]
    Io(#[from] std::io::Error),

    #[error("{program} was terminated by a signal")]
    TerminatedBySignal { program: String },
}

impl LintmaskErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        error_code::RUN_ERROR
    }
}
