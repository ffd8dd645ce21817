//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.verdict.toml` found by walking parent directories
//! 4. `~/.config/verdict/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;
use crate::output::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format when no `--format` flag is given.
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then a project-local config discovered
    /// from `start_dir`, then applies environment variable overrides.
    pub fn load(start_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: discovered project-local config
        if let Some(start) = start_dir {
            if let Some(local_path) = find_project_config(start) {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// explicitly set values).
    fn merge(&mut self, other: Config) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = Some(format),
                Err(_) => eprintln!(
                    "Warning: ignoring invalid {} value: {val}",
                    crate::constants::ENV_FORMAT
                ),
            }
        }
    }
}

/// Walk parent directories from `start` looking for the project-local
/// config file.
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(crate::constants::CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.output.format.is_none());
    }

    #[test]
    fn parse_toml_config() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_empty_toml_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.output.format.is_none());
    }

    #[test]
    fn merge_overrides_set_values() {
        let mut base = Config::default();
        let other: Config = toml::from_str("[output]\nformat = \"terminal\"\n").unwrap();
        base.merge(other);
        assert_eq!(base.output.format, Some(OutputFormat::Terminal));
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.output.format = Some(OutputFormat::Json);
        base.merge(Config::default());
        assert_eq!(base.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let result = Config::load_file(Path::new("/tmp/verdict_not_exist_config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn find_project_config_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".verdict.toml"), "").unwrap();
        let found = find_project_config(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".verdict.toml"));
    }

    #[test]
    fn find_project_config_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".verdict.toml"), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let found = find_project_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".verdict.toml"));
    }

    #[test]
    fn find_project_config_none() {
        let dir = tempfile::tempdir().unwrap();
        // A fresh tempdir under /tmp has no .verdict.toml in its chain
        // unless one was planted system-wide, which tests don't do.
        assert!(find_project_config(dir.path()).is_none());
    }

    #[test]
    fn load_discovers_local_config() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".verdict.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn env_var_overrides_local_config() {
        let env = Env::mock([("VERDICT_FORMAT", "terminal")]);
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".verdict.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Terminal));
    }

    #[test]
    fn invalid_env_var_is_ignored() {
        let env = Env::mock([("VERDICT_FORMAT", "yaml")]);
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert!(config.output.format.is_none());
    }
}
