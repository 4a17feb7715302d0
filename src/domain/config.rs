//! `moviedb.toml` configuration model.

use std::path::PathBuf;

use serde::Deserialize;

use super::AppError;

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "moviedb.toml";

/// Backing file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Environment variable overriding the backing file.
pub const DATA_ENV_VAR: &str = "MOVIEDB_DATA";

/// Parsed contents of `moviedb.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Catalog file, relative to the working directory unless absolute.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}
