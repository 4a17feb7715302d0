//! Update command: overwrite a movie's rating and year, and optionally its genre.

use crate::app::AppContext;
use crate::domain::{AppError, Catalog, MovieEntry, RecordUpdate};
use crate::ports::CatalogStore;

/// Outcome of an update operation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The stored record now holds the new values.
    Updated { movie: MovieEntry },
    /// No movie is stored under exactly this name; nothing was saved.
    NotFound { name: String },
    /// The catalog has no movies; nothing was saved.
    EmptyCatalog,
}

impl UpdateOutcome {
    pub fn message(&self) -> String {
        match self {
            UpdateOutcome::Updated { movie } => format!("Movie '{}' has been updated.", movie.name),
            UpdateOutcome::NotFound { .. } => "Movie not in the list".to_string(),
            UpdateOutcome::EmptyCatalog => "No movies in the list.".to_string(),
        }
    }
}

/// Apply `update` to the movie stored under exactly `name`, then save.
pub fn execute<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    name: &str,
    update: RecordUpdate,
) -> Result<UpdateOutcome, AppError> {
    if catalog.is_empty() {
        return Ok(UpdateOutcome::EmptyCatalog);
    }

    let Some(record) = catalog.update_exact(name, update) else {
        log::debug!("No movie named exactly '{}' to update", name);
        return Ok(UpdateOutcome::NotFound { name: name.to_string() });
    };
    let movie = MovieEntry::new(name, record);

    ctx.store().save(catalog)?;
    Ok(UpdateOutcome::Updated { movie })
}
