//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "verdict";

/// Project-local config filename, discovered by walking parent directories.
pub const CONFIG_FILENAME: &str = ".verdict.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "verdict";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "VERDICT_FORMAT";
