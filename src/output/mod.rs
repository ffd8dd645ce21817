//! Report renderers: terminal and machine-readable JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateResult;

/// Trait for rendering an aggregation result to an output format.
pub trait ReportRenderer {
    /// Render the result to a string.
    fn render(&self, result: &AggregateResult) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a result using the renderer for this format.
    pub fn render(&self, result: &AggregateResult) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(result),
            OutputFormat::Json => json::JsonRenderer.render(result),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unsupported output format: '{other}'. Supported: terminal, json"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::models::{Review, Role};
    use indexmap::IndexMap;
    use serde_json::json;

    fn sample_result() -> AggregateResult {
        let mut reviews: IndexMap<Role, Review> = IndexMap::new();
        reviews.insert(
            Role::Architect,
            Review::from_value(&json!({
                "status": "pass",
                "issues": [{"file": "src/main.rs", "line": 42, "issue": "Leaky abstraction", "severity": "high"}]
            })),
        );
        aggregate(&reviews)
    }

    #[test]
    fn format_from_str() {
        assert_eq!("terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn format_deserializes_from_toml_value() {
        let format: OutputFormat = serde_json::from_value(json!("json")).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn format_render_terminal() {
        let output = OutputFormat::Terminal.render(&sample_result());
        assert!(output.contains("src/main.rs:42"));
    }

    #[test]
    fn format_render_json() {
        let output = OutputFormat::Json.render(&sample_result());
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total_issues"], 1);
    }
}
