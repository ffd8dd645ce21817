//! Terminal renderer: styled report grouped by severity bucket.

use colored::Colorize;

use crate::aggregate::AggregateResult;
use crate::models::{Issue, Severity};
use crate::output::ReportRenderer;

/// Terminal report renderer with colored, flowing text.
pub struct TerminalRenderer;

impl ReportRenderer for TerminalRenderer {
    fn render(&self, result: &AggregateResult) -> String {
        // A reviewer can block with `status: "fail"` without reporting a
        // single issue, so an empty issue list alone is not success.
        if result.total_issues == 0 && !result.has_critical && !result.has_high {
            return format!("{}", "  ✔ No issues found in reviews.\n".green());
        }

        let mut output = String::new();

        if result.total_issues > 0 {
            output.push_str(&format!(
                "\n{}\n\n",
                format!("Review summary: {} issue(s) found", result.total_issues).bold()
            ));

            for (severity, issues) in &result.by_severity {
                if issues.is_empty() {
                    continue;
                }

                output.push_str(&format!(
                    " {} {} ({} issue{}):\n",
                    severity_icon(*severity),
                    severity_header(*severity),
                    issues.len(),
                    if issues.len() == 1 { "" } else { "s" },
                ));

                for issue in issues {
                    output.push_str(&render_issue(issue));
                }

                output.push('\n');
            }
        }

        output.push_str(&footer(result));
        output
    }
}

fn render_issue(issue: &Issue) -> String {
    let line = issue
        .line
        .map(|l| l.to_string())
        .unwrap_or_else(|| "?".to_string());
    let location = format!("{}:{}", issue.file, line);

    let mut out = format!(
        "   [{}] {}\n     {}\n",
        issue.reviewer.cyan(),
        location.bold(),
        issue.issue,
    );
    if let Some(ref suggestion) = issue.suggestion {
        out.push_str(&format!("     {} {}\n", "→".cyan(), suggestion));
    }
    out
}

fn severity_icon(severity: Severity) -> String {
    match severity {
        Severity::Critical => "✖".red().bold().to_string(),
        Severity::High => "⚠".yellow().bold().to_string(),
        Severity::Medium => "ℹ".blue().bold().to_string(),
        Severity::Low => "·".dimmed().to_string(),
    }
}

fn severity_header(severity: Severity) -> String {
    match severity {
        Severity::Critical => severity.label().red().bold().to_string(),
        Severity::High => severity.label().yellow().bold().to_string(),
        Severity::Medium => severity.label().blue().bold().to_string(),
        Severity::Low => severity.label().dimmed().to_string(),
    }
}

fn footer(result: &AggregateResult) -> String {
    if result.has_critical {
        format!(
            "{}\n",
            " ✖ Critical issues must be fixed before proceeding.".red().bold()
        )
    } else if result.has_high {
        format!(
            "{}\n{}\n",
            " ⚠ High priority issues should be addressed.".yellow().bold(),
            "   Use 'git commit --no-verify' to bypass if necessary.".dimmed(),
        )
    } else {
        format!("{}\n", " ✔ No blocking issues found.".green())
    }
}
