use crate::domain::{Catalog, MovieEntry};

/// Movies whose name contains `query`, ignoring case.
pub fn execute(catalog: &Catalog, query: &str) -> Vec<MovieEntry> {
    catalog.search(query).into_iter().map(|(name, record)| MovieEntry::new(name, record)).collect()
}
