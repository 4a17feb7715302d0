pub mod catalog;
pub mod config;
pub mod error;
pub mod movie;
pub mod stats;
pub mod validation;

pub use catalog::Catalog;
pub use config::{AppConfig, CONFIG_FILE, DATA_ENV_VAR, DEFAULT_DATA_FILE, StorageConfig};
pub use error::AppError;
pub use movie::{MovieEntry, NewMovie, Record, RecordUpdate};
pub use stats::CatalogStats;
