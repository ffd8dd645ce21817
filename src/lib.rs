//! verdict — AI review aggregation gate (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod env;
pub mod loader;
pub mod models;
pub mod output;
