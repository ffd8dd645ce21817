//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions. The
//! positional arity check is done by hand so a short invocation prints
//! the usage line to stdout and exits 1 without touching any file.

pub mod args;

/// Usage line printed on stdout when fewer than three report paths are
/// supplied.
pub const USAGE: &str = "Usage: verdict <architect.json> <security.json> <testing.json> \
     [documentation.json] [devops.json] [ux.json]";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_required_reports() {
        assert!(USAGE.contains("architect.json"));
        assert!(USAGE.contains("security.json"));
        assert!(USAGE.contains("testing.json"));
    }
}
