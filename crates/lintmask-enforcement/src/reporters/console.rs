//! Console reporter: the human-readable report printed on stdout.

use std::fmt::Write;

use lintmask_core::errors::ReportError;
use lintmask_core::Category;

use super::Reporter;
use crate::decode::show_workings;
use crate::orchestrator::ExitReport;

/// Console reporter for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    /// Prefix the report with the status value's binary breakdown.
    pub show_workings: bool,
}

impl ConsoleReporter {
    pub fn new(show_workings: bool) -> Self {
        Self { show_workings }
    }

    fn write_section(
        output: &mut String,
        header: &str,
        categories: &[Category],
    ) -> Result<(), std::fmt::Error> {
        writeln!(output, "{header}")?;
        writeln!(output)?;
        for category in categories {
            writeln!(output, "  - {}", category.label())?;
        }
        writeln!(output)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &ExitReport) -> Result<String, ReportError> {
        let mut output = String::new();

        if self.show_workings {
            writeln!(output, "{}", show_workings(report.raw_status()))?;
        }

        if let Some(verdict) = report.quality.filter(|v| !v.passed) {
            writeln!(
                output,
                "Quality score {} is below the threshold of {}",
                verdict.score, verdict.threshold
            )?;
        }

        let triggered = report.triggered();
        if !triggered.is_empty() {
            Self::write_section(
                &mut output,
                "The following types of issues were found:",
                &triggered,
            )?;
        }

        if report.passed() {
            writeln!(output, "Exiting gracefully...")?;
        } else {
            Self::write_section(
                &mut output,
                "The following types of issues are blocking:",
                &report.blocking(),
            )?;
            writeln!(output, "Exiting due to issues...")?;
        }

        Ok(output)
    }
}
