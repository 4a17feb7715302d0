use crate::ports::CatalogStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the catalog store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
