//! Clap argument types and positional validation.

use clap::Parser;
use std::path::{Path, PathBuf};

use verdict::models::Role;
use verdict::output::OutputFormat;

/// Aggregates AI reviewer reports into a single gate decision.
#[derive(Parser, Debug)]
#[command(name = "verdict", version, about)]
pub struct Cli {
    /// Architect review report.
    #[arg(value_name = "architect.json")]
    pub architect: Option<PathBuf>,

    /// Security review report.
    #[arg(value_name = "security.json")]
    pub security: Option<PathBuf>,

    /// Testing review report.
    #[arg(value_name = "testing.json")]
    pub testing: Option<PathBuf>,

    /// Documentation review report (optional).
    #[arg(value_name = "documentation.json")]
    pub documentation: Option<PathBuf>,

    /// DevOps review report (optional).
    #[arg(value_name = "devops.json")]
    pub devops: Option<PathBuf>,

    /// UX review report (optional).
    #[arg(value_name = "ux.json")]
    pub ux: Option<PathBuf>,

    /// Output format (overrides config and VERDICT_FORMAT).
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// The validated set of report paths, split by requiredness.
#[derive(Debug, Clone)]
pub struct RolePaths {
    pub architect: PathBuf,
    pub security: PathBuf,
    pub testing: PathBuf,
    pub documentation: Option<PathBuf>,
    pub devops: Option<PathBuf>,
    pub ux: Option<PathBuf>,
}

impl Cli {
    /// Validate that all three required report paths were supplied.
    pub fn role_paths(&self) -> Result<RolePaths, String> {
        match (&self.architect, &self.security, &self.testing) {
            (Some(architect), Some(security), Some(testing)) => Ok(RolePaths {
                architect: architect.clone(),
                security: security.clone(),
                testing: testing.clone(),
                documentation: self.documentation.clone(),
                devops: self.devops.clone(),
                ux: self.ux.clone(),
            }),
            _ => Err(super::USAGE.to_string()),
        }
    }
}

impl RolePaths {
    /// The required role paths, in processing order.
    pub fn required(&self) -> [(Role, &Path); 3] {
        [
            (Role::Architect, self.architect.as_path()),
            (Role::Security, self.security.as_path()),
            (Role::Testing, self.testing.as_path()),
        ]
    }

    /// The optional role paths, in processing order.
    pub fn optional(&self) -> [(Role, Option<&Path>); 3] {
        [
            (Role::Documentation, self.documentation.as_deref()),
            (Role::Devops, self.devops.as_deref()),
            (Role::Ux, self.ux.as_deref()),
        ]
    }
}
