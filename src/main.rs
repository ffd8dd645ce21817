//! verdict — AI review aggregation gate.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;

use verdict::aggregate;
use verdict::config::Config;
use verdict::env::Env;
use verdict::loader;
use verdict::models::{Review, Role};

use cli::args::{Cli, RolePaths};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    let paths = match cli.role_paths() {
        Ok(paths) => paths,
        Err(usage) => {
            // Usage errors go to stdout and share the blocking exit code.
            println!("{usage}");
            return Ok(1);
        }
    };

    let start_dir = std::env::current_dir().ok();
    let config = Config::load(start_dir.as_deref(), &Env::real())
        .context("failed to load configuration")?;

    let reviews = load_reviews(&paths);
    let result = aggregate::aggregate(&reviews);

    let format = cli.format.or(config.output.format).unwrap_or_default();
    print!("{}", format.render(&result));

    Ok(result.exit_code)
}

/// Load every supplied role's review. Required roles always load;
/// optional roles only when their path exists on disk.
fn load_reviews(paths: &RolePaths) -> IndexMap<Role, Review> {
    let mut reviews = IndexMap::new();

    for (role, path) in paths.required() {
        reviews.insert(role, loader::load(path));
    }

    for (role, path) in paths.optional() {
        if let Some(path) = path {
            if path.exists() {
                reviews.insert(role, loader::load(path));
            }
        }
    }

    reviews
}
