use serde::Serialize;

use crate::error::Result;
use crate::report::{Outcome, RunReport, Status};

use super::ReportFormatter;

/// Machine-readable report for CI consumers.
pub struct JsonFormatter;

#[derive(Debug, Serialize)]
pub struct JsonReport {
    summary: Summary,
    results: Vec<JsonResult>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    warnings: usize,
    failed: usize,
    new: usize,
    errors: usize,
    success_rate: f64,
}

#[derive(Debug, Serialize)]
struct JsonResult {
    name: String,
    status: Status,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifacts: Option<serde_json::Map<String, serde_json::Value>>,
}

impl JsonReport {
    #[must_use]
    pub fn from_report<R: Outcome>(report: &RunReport<R>) -> Self {
        let tally = report.tally();
        Self {
            summary: Summary {
                total: tally.total,
                passed: tally.passed,
                warnings: tally.warnings,
                failed: tally.failed,
                new: tally.new,
                errors: tally.errors,
                success_rate: tally.success_rate(),
            },
            results: report.results().iter().map(convert_result).collect(),
        }
    }
}

fn convert_result<R: Outcome>(result: &R) -> JsonResult {
    let artifacts = result.artifacts();
    JsonResult {
        name: result.name().to_string(),
        status: result.status(),
        message: result.message(),
        artifacts: (!artifacts.is_empty()).then(|| {
            artifacts
                .into_iter()
                .map(|(role, path)| {
                    (
                        role.to_string(),
                        serde_json::Value::String(path.display().to_string()),
                    )
                })
                .collect()
        }),
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<R: Outcome>(&self, _title: &str, report: &RunReport<R>) -> Result<String> {
        Ok(serde_json::to_string_pretty(&JsonReport::from_report(report))?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
