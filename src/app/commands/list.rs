//! List command: every movie, in name or rating order.

use crate::domain::{Catalog, MovieEntry, Record};

/// Ordering for listed movies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListOrder {
    #[default]
    Name,
    /// Highest rating first.
    Rating,
}

pub fn execute(catalog: &Catalog, order: ListOrder) -> Vec<MovieEntry> {
    let movies: Vec<(&str, &Record)> = match order {
        ListOrder::Name => catalog.iter().collect(),
        ListOrder::Rating => catalog.sorted_by_rating(),
    };
    movies.into_iter().map(|(name, record)| MovieEntry::new(name, record)).collect()
}
