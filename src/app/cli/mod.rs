//! CLI Adapter.

mod add;
mod delete;
mod logging;
mod menu;
mod prompts;
mod update;
mod views;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::JsonFileCatalogStore;
use crate::app::commands::ListOrder;
use crate::app::{AppContext, api};
use crate::domain::AppError;
use crate::domain::validation::{parse_rating, parse_year};
use crate::ports::CatalogStore;

use add::AddInputs;
use update::UpdateInputs;

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(version)]
#[command(about = "Keep a personal movie catalog in a JSON file", long_about = None)]
struct Cli {
    /// Catalog file (defaults to $MOVIEDB_DATA, moviedb.toml, then data.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    #[clap(visible_alias = "m")]
    Menu,
    /// List all movies
    #[clap(visible_alias = "ls")]
    List {
        /// Sort order
        #[arg(long, value_enum, default_value = "name")]
        sort: SortKey,
    },
    /// Add a movie
    #[clap(visible_alias = "a")]
    Add {
        /// Movie name
        name: Option<String>,
        /// Release year
        #[arg(short, long, value_parser = parse_year, allow_hyphen_values = true)]
        year: Option<i32>,
        /// Rating between 0 and 10
        #[arg(short, long, value_parser = parse_rating)]
        rating: Option<f64>,
        /// Genre
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Delete a movie (name matched ignoring case)
    #[clap(visible_alias = "rm")]
    Delete {
        /// Movie name
        name: Option<String>,
    },
    /// Update a movie's rating, year and optionally genre (exact name)
    #[clap(visible_alias = "u")]
    Update {
        /// Movie name
        name: Option<String>,
        /// New rating between 0 and 10
        #[arg(short, long, value_parser = parse_rating)]
        rating: Option<f64>,
        /// New release year
        #[arg(short, long, value_parser = parse_year, allow_hyphen_values = true)]
        year: Option<i32>,
        /// New genre (left unchanged when omitted)
        #[arg(short, long)]
        genre: Option<String>,
    },
    /// Search movies by part of their name
    #[clap(visible_alias = "s")]
    Search {
        /// Text to look for, ignoring case
        query: Option<String>,
    },
    /// Show rating statistics
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Name,
    Rating,
}

impl From<SortKey> for ListOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => ListOrder::Name,
            SortKey::Rating => ListOrder::Rating,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let data_file = api::data_file(cli.data.as_deref())?;
    log::debug!("Using catalog file {}", data_file.display());

    let ctx = AppContext::new(JsonFileCatalogStore::new(data_file));
    let mut catalog = ctx.store().load();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run(&ctx, &mut catalog),
        Commands::List { sort } => views::run_list(&catalog, sort.into()),
        Commands::Add { name, year, rating, genre } => {
            add::run(&ctx, &mut catalog, AddInputs { name, year, rating, genre })
        }
        Commands::Delete { name } => delete::run(&ctx, &mut catalog, name),
        Commands::Update { name, rating, year, genre } => {
            update::run(&ctx, &mut catalog, UpdateInputs { name, rating, year, genre })
        }
        Commands::Search { query } => views::run_search(&catalog, query),
        Commands::Stats => views::run_stats(&catalog),
    }
}
