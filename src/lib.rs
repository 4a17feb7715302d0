//! moviedb: keep a personal movie catalog in a JSON file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AddOutcome, DeleteOutcome, ListOrder, UpdateOutcome, add_at, data_file, delete_at, list_at,
    load_at, search_at, stats_at, update_at,
};
pub use domain::{AppError, Catalog, CatalogStats, MovieEntry, NewMovie, Record, RecordUpdate};
