//! Configuration loading.
//!
//! deskcalc reads an optional TOML file from the platform config directory
//! (`~/.config/deskcalc/config.toml` on Linux). A missing file means
//! defaults; a file that exists but cannot be read or parsed is a startup
//! error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User-tunable settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text shown on the result line for an invalid computation (division
    /// by zero). Localizable.
    pub error_label: String,
    /// Copy the result to the clipboard automatically when equals accepts a
    /// computation.
    pub copy_on_equals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_label: "Error".to_string(),
            copy_on_equals: false,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(PathBuf::from).or_else(default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
}
