//! JSON reporter: structured JSON output.

use serde_json::json;

use lintmask_core::errors::ReportError;
use lintmask_core::Category;

use super::Reporter;
use crate::decode::show_workings;
use crate::orchestrator::ExitReport;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

fn categories_json(categories: &[Category]) -> Vec<serde_json::Value> {
    categories
        .iter()
        .map(|c| {
            json!({
                "category": c,
                "bit": c.bit(),
                "label": c.label(),
            })
        })
        .collect()
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &ExitReport) -> Result<String, ReportError> {
        let output = json!({
            "raw_status": report.raw_status(),
            "workings": show_workings(report.raw_status()),
            "exit_code": report.exit_code,
            "passed": report.passed(),
            "triggered": categories_json(&report.triggered()),
            "blocking": categories_json(&report.blocking()),
            "quality": report.quality,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
