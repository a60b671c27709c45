//! Reporters: output formats for an exit report.

pub mod console;
pub mod json;

use lintmask_core::errors::ReportError;

use crate::orchestrator::ExitReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &ExitReport) -> Result<String, ReportError>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, show_workings: bool) -> Result<Box<dyn Reporter>, ReportError> {
    match format {
        "console" => Ok(Box::new(console::ConsoleReporter::new(show_workings))),
        "json" => Ok(Box::new(json::JsonReporter)),
        other => Err(ReportError::UnknownFormat(other.to_string())),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    lintmask_core::constants::AVAILABLE_FORMATS
}
