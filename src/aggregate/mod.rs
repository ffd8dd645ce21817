//! Merging of per-role reviews into a single gate decision.
//!
//! Single pass over the role→review mapping: stamp each issue with its
//! originating role, bucket by severity, and decide the exit code. The
//! mapping's insertion order is the report order, so callers insert
//! required roles first.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{Issue, Review, Role, Severity};

/// The merged outcome of one aggregation run.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Total number of issues across all reviewers.
    pub total_issues: usize,
    /// Issues bucketed by severity, most severe bucket first. Within a
    /// bucket, issues keep their role-processing order.
    pub by_severity: IndexMap<Severity, Vec<Issue>>,
    /// Whether any reviewer failed outright or reported a critical issue.
    pub has_critical: bool,
    /// Whether any issue is high severity.
    pub has_high: bool,
    /// 0 when nothing blocks, 1 otherwise.
    pub exit_code: i32,
}

impl AggregateResult {
    /// All issues in report order, flattened across buckets.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity.values().flatten()
    }
}

/// Merge per-role reviews into an [`AggregateResult`].
pub fn aggregate(reviews: &IndexMap<Role, Review>) -> AggregateResult {
    let mut has_critical = false;
    let mut has_high = false;
    let mut all_issues: Vec<Issue> = Vec::new();

    for (role, review) in reviews {
        if review.is_failed() {
            has_critical = true;
        }

        for issue in &review.issues {
            let mut issue = issue.clone();
            issue.reviewer = role.to_string();

            match issue.severity {
                Severity::Critical => has_critical = true,
                Severity::High => has_high = true,
                _ => {}
            }

            all_issues.push(issue);
        }
    }

    // Seed the buckets so the severity order is fixed regardless of
    // which severities actually occur.
    let mut by_severity: IndexMap<Severity, Vec<Issue>> = Severity::BUCKET_ORDER
        .into_iter()
        .map(|severity| (severity, Vec::new()))
        .collect();
    let total_issues = all_issues.len();
    for issue in all_issues {
        by_severity.entry(issue.severity).or_default().push(issue);
    }

    let exit_code = if has_critical || has_high { 1 } else { 0 };

    AggregateResult {
        total_issues,
        by_severity,
        has_critical,
        has_high,
        exit_code,
    }
}
