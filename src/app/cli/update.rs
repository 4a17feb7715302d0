use super::prompts::{confirm, prompt_name, prompt_rating, prompt_text, prompt_year};
use crate::app::AppContext;
use crate::app::commands::{UpdateOutcome, update};
use crate::domain::{AppError, Catalog, RecordUpdate};
use crate::ports::CatalogStore;

/// Values supplied on the command line; anything missing is prompted for.
#[derive(Debug, Default)]
pub(super) struct UpdateInputs {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub year: Option<i32>,
    pub genre: Option<String>,
}

pub(super) fn run<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    inputs: UpdateInputs,
) -> Result<(), AppError> {
    if catalog.is_empty() {
        println!("{}", UpdateOutcome::EmptyCatalog.message());
        return Ok(());
    }

    let name = match inputs.name.clone() {
        Some(value) => value,
        None => match prompt_name("Name of the movie to update")? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    if catalog.get(&name).is_none() {
        println!("{}", UpdateOutcome::NotFound { name }.message());
        return Ok(());
    }

    let Some(changes) = resolve_changes(inputs)? else {
        return Ok(());
    };

    let outcome = update::execute(ctx, catalog, &name, changes)?;
    match &outcome {
        UpdateOutcome::Updated { movie } => println!("✅ Updated {}", movie),
        UpdateOutcome::NotFound { .. } | UpdateOutcome::EmptyCatalog => {
            println!("{}", outcome.message())
        }
    }
    Ok(())
}

fn resolve_changes(inputs: UpdateInputs) -> Result<Option<RecordUpdate>, AppError> {
    // Only offer the genre question when the session is already interactive.
    let interactive = inputs.rating.is_none() || inputs.year.is_none();

    let rating = match inputs.rating {
        Some(value) => value,
        None => match prompt_rating("New rating (0-10)")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let year = match inputs.year {
        Some(value) => value,
        None => match prompt_year("New year of release (e.g., 2022)")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let genre = match inputs.genre {
        Some(value) => Some(value),
        None if interactive => match confirm("Would you like to update the genre?")? {
            Some(true) => match prompt_text("New genre")? {
                Some(value) => Some(value),
                None => return Ok(None),
            },
            Some(false) => None,
            None => return Ok(None),
        },
        None => None,
    };

    RecordUpdate::new(rating, year, genre).map(Some)
}
