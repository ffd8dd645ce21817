//! Configuration loading and layering.
//!
//! Handles `.verdict.toml` discovery, environment variable resolution,
//! and CLI flag merging with proper priority ordering. The aggregation
//! logic never reads configuration; `main` resolves it and passes the
//! relevant values down.

pub mod loader;

pub use loader::{Config, find_project_config};
