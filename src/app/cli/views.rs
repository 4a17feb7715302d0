//! Read-only views: list, search, stats.

use super::prompts::prompt_name;
use crate::app::commands::{ListOrder, list, search, stats};
use crate::domain::{AppError, Catalog};

const EMPTY_MESSAGE: &str = "No movies in the list.";

pub(super) fn run_list(catalog: &Catalog, order: ListOrder) -> Result<(), AppError> {
    let movies = list::execute(catalog, order);
    if movies.is_empty() {
        println!("{}", EMPTY_MESSAGE);
        return Ok(());
    }

    println!("{} movie(s) in total", movies.len());
    for movie in &movies {
        println!("  {}", movie);
    }
    Ok(())
}

pub(super) fn run_search(catalog: &Catalog, query: Option<String>) -> Result<(), AppError> {
    if catalog.is_empty() {
        println!("{}", EMPTY_MESSAGE);
        return Ok(());
    }

    let query = match query {
        Some(value) => value,
        None => match prompt_name("Part of the movie name")? {
            Some(value) => value,
            None => return Ok(()),
        },
    };

    let found = search::execute(catalog, &query);
    if found.is_empty() {
        println!("No movies match '{}'", query);
        return Ok(());
    }
    for movie in &found {
        println!("  {}", movie);
    }
    Ok(())
}

pub(super) fn run_stats(catalog: &Catalog) -> Result<(), AppError> {
    match stats::execute(catalog) {
        Some(summary) => {
            for line in stats::render(&summary) {
                println!("{}", line);
            }
        }
        None => println!("{}", EMPTY_MESSAGE),
    }
    Ok(())
}
