//! Connection-string configuration.
//!
//! The connection string is taken from, in order:
//! 1. `--connection-string` / `USER_BENCH_CONNECTION_STRING`
//! 2. the TOML file given with `--config`
//! 3. `user-bench.toml` in the working directory, when it exists
//!
//! ```toml
//! [connection_strings]
//! default_connection = "host=localhost user=postgres password=postgres dbname=users"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "user-bench.toml";

/// Contents of the TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub connection_strings: ConnectionStrings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionStrings {
    pub default_connection: Option<String>,
}

impl AppConfig {
    /// Load a config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config file {path:?}"))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured connection string, ignoring blank values.
    pub fn default_connection(&self) -> Option<&str> {
        self.connection_strings
            .default_connection
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// Resolve the connection string from the flag/env value and config files.
pub fn resolve_connection_string(
    explicit: Option<&str>,
    config_path: Option<&Path>,
) -> anyhow::Result<String> {
    if let Some(connection_string) = explicit.filter(|s| !s.trim().is_empty()) {
        return Ok(connection_string.to_string());
    }

    let path: Option<PathBuf> = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    };

    if let Some(path) = path {
        let config = AppConfig::from_file(&path)?;
        if let Some(connection_string) = config.default_connection() {
            tracing::debug!("Using connection string from {:?}", path);
            return Ok(connection_string.to_string());
        }
    }

    anyhow::bail!("Connection string not found.")
}
