use dialoguer::Select;

use super::add::AddInputs;
use super::prompts::ensure_terminal;
use super::update::UpdateInputs;
use super::{add, delete, update, views};
use crate::app::AppContext;
use crate::app::commands::ListOrder;
use crate::domain::{AppError, Catalog};
use crate::ports::CatalogStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    List,
    SortByRating,
    Add,
    Delete,
    Update,
    Search,
    Stats,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 8] = [
        MenuAction::List,
        MenuAction::SortByRating,
        MenuAction::Add,
        MenuAction::Delete,
        MenuAction::Update,
        MenuAction::Search,
        MenuAction::Stats,
        MenuAction::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::List => "List movies",
            MenuAction::SortByRating => "Movies sorted by rating",
            MenuAction::Add => "Add movie",
            MenuAction::Delete => "Delete movie",
            MenuAction::Update => "Update movie",
            MenuAction::Search => "Search movie",
            MenuAction::Stats => "Stats",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Interactive loop over a catalog loaded once by the caller.
pub(super) fn run<S: CatalogStore>(
    ctx: &AppContext<S>,
    catalog: &mut Catalog,
) -> Result<(), AppError> {
    ensure_terminal("The interactive menu")?;
    let items: Vec<&str> = MenuAction::ALL.iter().map(|action| action.label()).collect();

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("Movie catalog")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Prompt(format!("Failed to select action: {}", err)))?;

        let Some(index) = selection else {
            return Ok(());
        };

        match MenuAction::ALL[index] {
            MenuAction::List => views::run_list(catalog, ListOrder::Name)?,
            MenuAction::SortByRating => views::run_list(catalog, ListOrder::Rating)?,
            MenuAction::Add => add::run(ctx, catalog, AddInputs::default())?,
            MenuAction::Delete => delete::run(ctx, catalog, None)?,
            MenuAction::Update => update::run(ctx, catalog, UpdateInputs::default())?,
            MenuAction::Search => views::run_search(catalog, None)?,
            MenuAction::Stats => views::run_stats(catalog)?,
            MenuAction::Exit => {
                println!("Bye!");
                return Ok(());
            }
        }
    }
}
