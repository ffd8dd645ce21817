//! Shared types used across all modules.
//!
//! Defines the reviewer roles and the review/issue data structures.
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod review;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use review::{Issue, Review, Severity};

/// A reviewer role. Each role produces one review report file.
///
/// The first three roles are required on every run; the rest are
/// optional and only included when the caller supplies a path for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Architect,
    Security,
    Testing,
    Documentation,
    Devops,
    Ux,
}

impl Role {
    /// Roles that must always be supplied, in processing order.
    pub const REQUIRED: [Role; 3] = [Role::Architect, Role::Security, Role::Testing];

    /// Roles that may be supplied, in processing order.
    pub const OPTIONAL: [Role; 3] = [Role::Documentation, Role::Devops, Role::Ux];

    /// The role name as it appears in reports and reviewer tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Security => "security",
            Role::Testing => "testing",
            Role::Documentation => "documentation",
            Role::Devops => "devops",
            Role::Ux => "ux",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "architect" => Ok(Role::Architect),
            "security" => Ok(Role::Security),
            "testing" => Ok(Role::Testing),
            "documentation" => Ok(Role::Documentation),
            "devops" => Ok(Role::Devops),
            "ux" => Ok(Role::Ux),
            other => Err(format!(
                "unknown reviewer role: '{other}'. Known roles: architect, security, \
                 testing, documentation, devops, ux"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display() {
        assert_eq!(Role::Architect.to_string(), "architect");
        assert_eq!(Role::Devops.to_string(), "devops");
        assert_eq!(Role::Ux.to_string(), "ux");
    }

    #[test]
    fn role_from_str_case_insensitive() {
        assert_eq!("Security".parse::<Role>().unwrap(), Role::Security);
        assert_eq!("TESTING".parse::<Role>().unwrap(), Role::Testing);
    }

    #[test]
    fn role_from_str_invalid() {
        let err = "reviewer".parse::<Role>().unwrap_err();
        assert!(err.contains("unknown reviewer role"));
    }

    #[test]
    fn required_and_optional_are_disjoint() {
        for role in Role::REQUIRED {
            assert!(!Role::OPTIONAL.contains(&role));
        }
    }

    #[test]
    fn role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Documentation).unwrap();
        assert_eq!(json, "\"documentation\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Documentation);
    }
}
