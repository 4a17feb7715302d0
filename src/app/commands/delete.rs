//! Delete command: remove a movie by name, ignoring case.

use crate::app::AppContext;
use crate::domain::{AppError, Catalog};
use crate::ports::CatalogStore;

/// Outcome of a delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The movie stored under `name` was removed.
    Deleted { name: String },
    /// No movie matched; nothing was saved.
    NotFound { name: String },
    /// The catalog has no movies; nothing was saved.
    EmptyCatalog,
}

impl DeleteOutcome {
    pub fn message(&self) -> String {
        match self {
            DeleteOutcome::Deleted { name } => format!("Movie '{}' has been deleted.", name),
            DeleteOutcome::NotFound { .. } => "Movie not in the list".to_string(),
            DeleteOutcome::EmptyCatalog => "No movies in the list.".to_string(),
        }
    }
}

/// Remove the first movie whose name matches `name` ignoring case, then save.
pub fn execute<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    name: &str,
) -> Result<DeleteOutcome, AppError> {
    if catalog.is_empty() {
        return Ok(DeleteOutcome::EmptyCatalog);
    }

    let Some((stored_name, _)) = catalog.remove_ignore_case(name) else {
        log::debug!("No movie matching '{}' to delete", name);
        return Ok(DeleteOutcome::NotFound { name: name.to_string() });
    };

    ctx.store().save(catalog)?;
    Ok(DeleteOutcome::Deleted { name: stored_name })
}
