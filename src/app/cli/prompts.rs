//! Console prompts.
//!
//! Every prompt re-asks until the input passes validation. `Ok(None)` means
//! the user interrupted the prompt and the current operation should stop.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::validation::{parse_rating, parse_year, validate_name};
use crate::domain::{AppError, Catalog};

/// Error unless stdin is an interactive terminal.
pub(super) fn ensure_terminal(what: &str) -> Result<(), AppError> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(AppError::Prompt(format!("{} needs an interactive terminal", what)))
    }
}

fn interrupted<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", what, err))),
    }
}

/// Ask for a movie name not yet in `catalog` (compared ignoring case).
pub(super) fn prompt_new_name(catalog: &Catalog) -> Result<Option<String>, AppError> {
    ensure_terminal("Movie name prompt")?;
    let result = Input::<String>::new()
        .with_prompt("New movie to add")
        .validate_with(|input: &String| -> Result<(), AppError> {
            validate_name(input)?;
            match catalog.find_ignore_case(input) {
                Some(existing) => Err(AppError::MovieExists(existing.to_string())),
                None => Ok(()),
            }
        })
        .interact_text();
    interrupted(result, "movie name")
}

/// Ask for the name of an existing movie.
pub(super) fn prompt_name(prompt: &str) -> Result<Option<String>, AppError> {
    ensure_terminal("Movie name prompt")?;
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| validate_name(input).map(|_| ()))
        .interact_text();
    interrupted(result, "movie name")
}

pub(super) fn prompt_year(prompt: &str) -> Result<Option<i32>, AppError> {
    ensure_terminal("Year prompt")?;
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| parse_year(input).map(|_| ()))
        .interact_text();
    interrupted(result, "year")?.map(|value| parse_year(&value)).transpose()
}

pub(super) fn prompt_rating(prompt: &str) -> Result<Option<f64>, AppError> {
    ensure_terminal("Rating prompt")?;
    let result = Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| parse_rating(input).map(|_| ()))
        .interact_text();
    interrupted(result, "rating")?.map(|value| parse_rating(&value)).transpose()
}

/// Free text that may be left empty.
pub(super) fn prompt_text(prompt: &str) -> Result<Option<String>, AppError> {
    ensure_terminal("Text prompt")?;
    let result = Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text();
    interrupted(result, "input")
}

pub(super) fn confirm(prompt: &str) -> Result<Option<bool>, AppError> {
    ensure_terminal("Confirmation prompt")?;
    let result = Confirm::new().with_prompt(prompt).default(false).interact_opt();
    Ok(interrupted(result, "confirmation")?.flatten())
}
