//! API Facade for the application.
//!
//! Each function opens the catalog stored in `data_file`, runs one command
//! against it and, for mutations, writes it back.

use std::path::{Path, PathBuf};

use crate::adapters::JsonFileCatalogStore;
use crate::app::{
    AppContext,
    commands::{add, delete, list, search, stats, update},
    config,
};
use crate::ports::CatalogStore;

pub use crate::app::commands::{AddOutcome, DeleteOutcome, ListOrder, UpdateOutcome};
pub use crate::domain::{
    AppError, Catalog, CatalogStats, MovieEntry, NewMovie, Record, RecordUpdate,
};

/// Create an `AppContext` for a catalog file.
fn create_context(data_file: &Path) -> AppContext<JsonFileCatalogStore> {
    AppContext::new(JsonFileCatalogStore::new(data_file))
}

/// Resolve the catalog file for the current directory.
pub fn data_file(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    config::resolve_data_path(&std::env::current_dir()?, explicit)
}

/// Load the catalog stored in `data_file`. Missing or malformed files yield an empty catalog.
pub fn load_at(data_file: &Path) -> Catalog {
    create_context(data_file).store().load()
}

/// Add a movie to the catalog stored in `data_file`.
pub fn add_at(data_file: &Path, movie: NewMovie) -> Result<AddOutcome, AppError> {
    let ctx = create_context(data_file);
    let mut catalog = ctx.store().load();
    add::execute(&ctx, &mut catalog, movie)
}

/// Delete a movie, matched ignoring case, from the catalog stored in `data_file`.
pub fn delete_at(data_file: &Path, name: &str) -> Result<DeleteOutcome, AppError> {
    let ctx = create_context(data_file);
    let mut catalog = ctx.store().load();
    delete::execute(&ctx, &mut catalog, name)
}

/// Update the movie stored under exactly `name` in `data_file`.
pub fn update_at(
    data_file: &Path,
    name: &str,
    changes: RecordUpdate,
) -> Result<UpdateOutcome, AppError> {
    let ctx = create_context(data_file);
    let mut catalog = ctx.store().load();
    update::execute(&ctx, &mut catalog, name, changes)
}

/// List every movie in `data_file`.
pub fn list_at(data_file: &Path, order: ListOrder) -> Vec<MovieEntry> {
    list::execute(&load_at(data_file), order)
}

/// Search movie names in `data_file`, ignoring case.
pub fn search_at(data_file: &Path, query: &str) -> Vec<MovieEntry> {
    search::execute(&load_at(data_file), query)
}

/// Rating statistics for `data_file`, or `None` when it holds no movies.
pub fn stats_at(data_file: &Path) -> Option<CatalogStats> {
    stats::execute(&load_at(data_file))
}
