//! Configuration loading from the working directory.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, CONFIG_FILE};

/// Load and parse `moviedb.toml` from `root`, if present.
pub fn load_config(root: &Path) -> Result<Option<AppConfig>, AppError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path)?;
    let config = AppConfig::parse(&content).map_err(|err| {
        AppError::config_error(format!("Invalid {}: {}", config_path.display(), err))
    })?;
    log::debug!("Loaded configuration from {}", config_path.display());
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn present_config_is_parsed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[storage]\npath = \"films.json\"\n").unwrap();

        let config = load_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.storage.path, Some(PathBuf::from("films.json")));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[storage\n").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("moviedb.toml")));
    }
}
