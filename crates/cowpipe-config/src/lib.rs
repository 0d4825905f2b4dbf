//! # cowpipe Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`COWPIPE_FIGURE=stegosaurus`)
//! 3. User config (~/.config/cowpipe/config.toml, or `--config <path>`)
//! 4. Built-in defaults

use anyhow::Context;
use cowpipe_core::DEFAULT_FIGURE;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "COWPIPE_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "cowpipe", "cowpipe")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/cowpipe"))
}

/// Default location of the user config file
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Figure drawn when `-f` is not given
    pub figure: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            figure: DEFAULT_FIGURE.to_string(),
        }
    }
}

impl Config {
    /// Load with `path` as the config file, layered over defaults and under
    /// the environment. A missing file is skipped.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!("Loading configuration from {}", path.display());

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX));

        figment
            .extract()
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Defaults overlaid with the environment only, skipping any file
    pub fn from_env() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}* environment overrides: {}", ENV_PREFIX, e);
                Config::default()
            })
    }

    /// Like [`Config::load_from_file`], but a broken file is logged and
    /// skipped instead of failing. Environment overrides still apply.
    pub fn load_or_fallback(path: &Path) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            tracing::warn!("Falling back to defaults and environment: {:#}", e);
            Self::from_env()
        })
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.figure, "cow");
    }

    #[test]
    fn test_config_serialization() {
        let toml = Config::default().to_toml().unwrap();
        assert_eq!(toml.trim(), "figure = \"cow\"");
    }

    // Anything that reads COWPIPE_* runs inside a Jail so env changes in
    // one test never leak into another.

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let dir = tempfile::tempdir().unwrap();
            let config = Config::load_from_file(&dir.path().join("absent.toml")).unwrap();
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "figure = \"stegosaurus\"")?;

            let config = Config::load_from_file(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(config.figure, "stegosaurus");
            Ok(())
        });
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "colour = \"brown\"")?;

            let config = Config::load_from_file(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(config.figure, "cow");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "figure = \"cow\"")?;
            jail.set_env("COWPIPE_FIGURE", "stegosaurus");

            let config = Config::load_from_file(&jail.directory().join("config.toml")).unwrap();
            assert_eq!(config.figure, "stegosaurus");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "figure = [1, 2")?;

            assert!(Config::load_from_file(&jail.directory().join("config.toml")).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_keeps_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "figure = [1, 2")?;
            jail.set_env("COWPIPE_FIGURE", "stegosaurus");

            let config = Config::load_or_fallback(&jail.directory().join("config.toml"));
            assert_eq!(config.figure, "stegosaurus");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_without_env_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "figure = [1, 2")?;

            let config = Config::load_or_fallback(&jail.directory().join("config.toml"));
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_config_dir_is_named_for_the_app() {
        assert!(config_dir().to_string_lossy().contains("cowpipe"));
        assert!(default_config_path().ends_with("config.toml"));
    }
}
