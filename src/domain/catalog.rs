//! The in-memory movie catalog.
//!
//! Keys are stored exactly as entered. Duplicate detection on insert and lookup
//! on removal compare names case-insensitively; `update_exact` does not.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::movie::{NewMovie, Record, RecordUpdate};
use super::stats::CatalogStats;
use super::AppError;

/// Mapping of movie name to its record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    movies: BTreeMap<String, Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.movies.get(name)
    }

    /// Iterate over all movies in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.movies.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Find the stored key matching `name` when case is ignored.
    pub fn find_ignore_case(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        self.movies.keys().find(|key| key.to_lowercase() == needle).map(String::as_str)
    }

    /// Insert a movie unless one with the same name (ignoring case) exists.
    pub fn insert(&mut self, movie: NewMovie) -> Result<(), AppError> {
        if let Some(existing) = self.find_ignore_case(&movie.name) {
            return Err(AppError::MovieExists(existing.to_string()));
        }
        let (name, record) = movie.into_entry();
        self.movies.insert(name, record);
        Ok(())
    }

    /// Remove the first movie whose name matches ignoring case.
    ///
    /// Returns the stored name and record, or `None` if nothing matched.
    pub fn remove_ignore_case(&mut self, name: &str) -> Option<(String, Record)> {
        let key = self.find_ignore_case(name)?.to_string();
        self.movies.remove_entry(&key)
    }

    /// Apply `update` to the movie stored under exactly `name`.
    pub fn update_exact(&mut self, name: &str, update: RecordUpdate) -> Option<&Record> {
        let record = self.movies.get_mut(name)?;
        update.apply(record);
        Some(record)
    }

    /// Movies whose name contains `query`, ignoring case. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<(&str, &Record)> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter().filter(|(name, _)| name.to_lowercase().contains(&needle)).collect()
    }

    /// All movies, highest rating first, ties broken by name.
    pub fn sorted_by_rating(&self) -> Vec<(&str, &Record)> {
        let mut movies: Vec<_> = self.iter().collect();
        movies.sort_by(|(a_name, a), (b_name, b)| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal).then(a_name.cmp(b_name))
        });
        movies
    }

    /// Summary statistics, or `None` for an empty catalog.
    pub fn stats(&self) -> Option<CatalogStats> {
        CatalogStats::compute(self)
    }
}

impl FromIterator<(String, Record)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Record)>>(iter: I) -> Self {
        Self { movies: iter.into_iter().collect() }
    }
}
