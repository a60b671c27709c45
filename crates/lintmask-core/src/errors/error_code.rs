//! LintmaskErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code alongside its display message.
pub trait LintmaskErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STATUS_ERROR: &str = "STATUS_ERROR";
pub const RUN_ERROR: &str = "RUN_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
