//! Review and issue types, plus tolerant conversion from raw JSON.
//!
//! Review files are machine-generated and frequently sloppy, so every
//! field read here has a defined default. Conversion goes through
//! `serde_json::Value` rather than strict deserialization: a report
//! missing `status` or carrying a malformed issue entry still yields a
//! usable `Review` instead of an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity tier of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, never blocking.
    Low,
    /// Default tier for anything unrecognised.
    Medium,
    /// Blocks, but the gate can be bypassed.
    High,
    /// Blocks unconditionally.
    Critical,
}

/// Custom deserializer that accepts common reviewer variations.
///
/// Reviewers sometimes emit severities outside the recognised four;
/// those normalise to `medium` rather than failing the parse.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Severity::parse_lenient(&s))
    }
}

impl Severity {
    /// The fixed bucket/reporting order, most severe first.
    pub const BUCKET_ORDER: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Parse a severity string, normalising anything unrecognised to
    /// `medium`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Medium,
        }
    }

    /// Uppercase label for report headers.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Medium
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// A single finding reported by one reviewer.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// The file path the issue refers to.
    pub file: String,
    /// The line number (1-based), when the reviewer supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u64>,
    /// Description of the issue.
    pub issue: String,
    /// Suggested fix or improvement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// The severity of the issue.
    pub severity: Severity,
    /// The role that produced this issue. Not present in source files;
    /// stamped by the aggregator when merging.
    pub reviewer: String,
}

impl Issue {
    /// Convert a raw JSON value into an `Issue`, defaulting every
    /// missing or mistyped field.
    pub fn from_value(value: &Value) -> Self {
        Issue {
            file: value
                .get("file")
                .and_then(Value::as_str)
                .unwrap_or("<unknown>")
                .to_string(),
            line: value.get("line").and_then(Value::as_u64),
            issue: value
                .get("issue")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            suggestion: value
                .get("suggestion")
                .and_then(Value::as_str)
                .map(str::to_string),
            severity: value
                .get("severity")
                .and_then(Value::as_str)
                .map(Severity::parse_lenient)
                .unwrap_or_default(),
            reviewer: String::new(),
        }
    }
}

/// One reviewer role's normalized output: overall status plus findings.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    /// Free-form status. Only `"fail"` is semantically significant.
    pub status: Option<String>,
    /// Findings, in the order the reviewer reported them.
    pub issues: Vec<Issue>,
}

impl Review {
    /// The fallback review for unreadable, empty, or unparseable files.
    pub fn error_sentinel() -> Self {
        Review {
            status: Some("error".to_string()),
            issues: Vec::new(),
        }
    }

    /// Convert a parsed JSON value into a `Review`.
    ///
    /// Non-object values and missing fields all degrade to defaults;
    /// issue entries that are not objects are dropped.
    pub fn from_value(value: &Value) -> Self {
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string);
        let issues = value
            .get("issues")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.is_object())
                    .map(Issue::from_value)
                    .collect()
            })
            .unwrap_or_default();

        Review { status, issues }
    }

    /// Whether the reviewer explicitly failed the change.
    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some("fail")
    }
}
