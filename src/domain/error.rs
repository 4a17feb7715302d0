use std::io;

use thiserror::Error;

/// Library-wide error type for moviedb operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Catalog could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Config(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Rating is not a number in `0..=10`.
    #[error("Invalid rating '{0}': enter a value between 0 and 10")]
    InvalidRating(String),

    /// Year is not an integer.
    #[error("Invalid year '{0}': enter the year as an integer (e.g., 2022)")]
    InvalidYear(String),

    /// Movie name is blank.
    #[error("Movie name must not be empty")]
    InvalidName,

    /// A movie with the same name (ignoring case) is already stored.
    #[error("Movie '{0}' already exists")]
    MovieExists(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Config(message.into())
    }
}
