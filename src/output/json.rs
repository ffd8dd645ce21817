//! JSON report renderer.
//!
//! Serializes the full [`AggregateResult`] so other tooling can consume
//! the outcome without scraping the terminal report.

use crate::aggregate::AggregateResult;
use crate::output::ReportRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, result: &AggregateResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }
}
