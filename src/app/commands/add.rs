//! Add command: insert a movie and persist the catalog.

use crate::app::AppContext;
use crate::domain::{AppError, Catalog, MovieEntry, NewMovie, Record};
use crate::ports::CatalogStore;

/// Outcome of an add operation.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub movie: MovieEntry,
}

/// Insert `movie` and save the full catalog.
///
/// Fails with `AppError::MovieExists` when a movie with the same name,
/// compared case-insensitively, is already stored. Nothing is saved then.
pub fn execute<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    movie: NewMovie,
) -> Result<AddOutcome, AppError> {
    let entry = MovieEntry {
        name: movie.name.clone(),
        record: Record::new(movie.rating, movie.year, movie.genre.clone()),
    };
    catalog.insert(movie)?;
    ctx.store().save(catalog)?;
    Ok(AddOutcome { movie: entry })
}
