use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;
use super::validation::{validate_name, validate_rating};

/// Stored attributes of one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub rating: f64,
    pub year: i32,
    #[serde(default)]
    pub genre: String,
}

impl Record {
    pub fn new(rating: f64, year: i32, genre: impl Into<String>) -> Self {
        Self { rating, year, genre: genre.into() }
    }
}

/// A named record, as returned by listing queries.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieEntry {
    pub name: String,
    pub record: Record,
}

impl MovieEntry {
    pub fn new(name: &str, record: &Record) -> Self {
        Self { name: name.to_string(), record: record.clone() }
    }
}

impl fmt::Display for MovieEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.record.year, self.record.rating)?;
        if !self.record.genre.is_empty() {
            write!(f, " [{}]", self.record.genre)?;
        }
        Ok(())
    }
}

/// A movie to be added to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub name: String,
    pub year: i32,
    pub rating: f64,
    pub genre: String,
}

impl NewMovie {
    /// Build a new movie, validating the name and rating.
    pub fn new(
        name: impl Into<String>,
        year: i32,
        rating: f64,
        genre: impl Into<String>,
    ) -> Result<Self, AppError> {
        let name = name.into();
        validate_name(&name)?;
        let rating = validate_rating(rating)?;
        Ok(Self { name, year, rating, genre: genre.into() })
    }

    pub(crate) fn into_entry(self) -> (String, Record) {
        (self.name, Record { rating: self.rating, year: self.year, genre: self.genre })
    }
}

/// Replacement values for an existing record.
///
/// Rating and year are always overwritten; genre only when `Some`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub rating: f64,
    pub year: i32,
    pub genre: Option<String>,
}

impl RecordUpdate {
    pub fn new(rating: f64, year: i32, genre: Option<String>) -> Result<Self, AppError> {
        let rating = validate_rating(rating)?;
        Ok(Self { rating, year, genre })
    }

    pub(crate) fn apply(self, record: &mut Record) {
        record.rating = self.rating;
        record.year = self.year;
        if let Some(genre) = self.genre {
            record.genre = genre;
        }
    }
}
