//! Backing-file resolution.
//!
//! Precedence, highest first:
//! - explicit path (the `--data` flag)
//! - the `MOVIEDB_DATA` environment variable
//! - `[storage] path` in `moviedb.toml`
//! - `data.json`
//!
//! Relative paths are resolved against the working directory.

mod load_config;

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, DATA_ENV_VAR, DEFAULT_DATA_FILE};

pub use load_config::load_config;

/// Resolve the catalog file for `root`, reading `MOVIEDB_DATA` from the process environment.
pub fn resolve_data_path(root: &Path, explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    resolve_data_path_with_env(root, explicit, env::var_os(DATA_ENV_VAR))
}

/// Resolve the catalog file for `root` with an explicit environment value.
pub fn resolve_data_path_with_env(
    root: &Path,
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        return Ok(root.join(path));
    }

    if let Some(value) = env_value.filter(|value| !value.is_empty()) {
        return Ok(root.join(PathBuf::from(value)));
    }

    if let Some(path) = load_config(root)?.and_then(|config| config.storage.path) {
        return Ok(root.join(path));
    }

    Ok(root.join(DEFAULT_DATA_FILE))
}
