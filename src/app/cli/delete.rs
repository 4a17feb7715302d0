use super::prompts::prompt_name;
use crate::app::AppContext;
use crate::app::commands::{DeleteOutcome, delete};
use crate::domain::{AppError, Catalog};
use crate::ports::CatalogStore;

pub(super) fn run<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
    name: Option<String>,
) -> Result<(), AppError> {
    if catalog.is_empty() {
        println!("{}", DeleteOutcome::EmptyCatalog.message());
        return Ok(());
    }

    let name = match name {
        Some(value) => value,
        None => match prompt_name("Name of the movie to delete")? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    let outcome = delete::execute(ctx, catalog, &name)?;
    match outcome {
        DeleteOutcome::Deleted { .. } => println!("✅ {}", outcome.message()),
        DeleteOutcome::NotFound { .. } | DeleteOutcome::EmptyCatalog => {
            println!("{}", outcome.message())
        }
    }
    Ok(())
}
