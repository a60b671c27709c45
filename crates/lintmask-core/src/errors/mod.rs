//! Error handling for lintmask.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod lintmask_error;
pub mod report_error;
pub mod run_error;
pub mod status_error;

pub use config_error::ConfigError;
pub use error_code::LintmaskErrorCode;
pub use lintmask_error::LintmaskError;
pub use report_error::ReportError;
pub use run_error::RunError;
pub use status_error::StatusError;
