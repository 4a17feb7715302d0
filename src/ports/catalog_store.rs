use crate::domain::{AppError, Catalog};

/// Port for persisting the whole catalog.
pub trait CatalogStore {
    /// Load the stored catalog.
    ///
    /// Never fails: a missing or unreadable backing store yields an empty catalog.
    fn load(&self) -> Catalog;

    /// Overwrite the backing store with `catalog`.
    fn save(&self, catalog: &Catalog) -> Result<(), AppError>;
}
