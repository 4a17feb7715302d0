use super::prompts::{prompt_new_name, prompt_rating, prompt_text, prompt_year};
use crate::app::AppContext;
use crate::app::commands::add;
use crate::domain::validation::validate_name;
use crate::domain::{AppError, Catalog, NewMovie};
use crate::ports::CatalogStore;

/// Values supplied on the command line; anything missing is prompted for.
#[derive(Debug, Default)]
pub(super) struct AddInputs {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre: Option<String>,
}

pub(super) fn run<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    inputs: AddInputs,
) -> Result<(), AppError> {
    let Some(movie) = resolve_inputs(catalog, inputs)? else {
        return Ok(());
    };

    let outcome = add::execute(ctx, catalog, movie)?;
    println!("✅ Added {}", outcome.movie);
    Ok(())
}

fn resolve_inputs(catalog: &Catalog, inputs: AddInputs) -> Result<Option<NewMovie>, AppError> {
    let name = match inputs.name {
        Some(value) => {
            validate_name(&value)?;
            if let Some(existing) = catalog.find_ignore_case(&value) {
                return Err(AppError::MovieExists(existing.to_string()));
            }
            value
        }
        None => match prompt_new_name(catalog)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let year = match inputs.year {
        Some(value) => value,
        None => match prompt_year("Release year (e.g., 2022)")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let rating = match inputs.rating {
        Some(value) => value,
        None => match prompt_rating("Rating (0-10)")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let genre = match inputs.genre {
        Some(value) => value,
        None => match prompt_text("Genre (e.g., Comedy, Sci-Fi)")? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    NewMovie::new(name, year, rating, genre).map(Some)
}
