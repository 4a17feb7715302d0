use std::cell::RefCell;
use std::io;

use crate::domain::{AppError, Catalog};
use crate::ports::CatalogStore;

/// In-memory catalog store for testing.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockCatalogStore {
    pub stored: RefCell<Catalog>,
    pub save_count: RefCell<usize>,
    pub fail_saves: RefCell<bool>,
}

#[allow(dead_code)]
impl MockCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, catalog: Catalog) -> Self {
        *self.stored.borrow_mut() = catalog;
        self
    }

    pub fn failing(self) -> Self {
        *self.fail_saves.borrow_mut() = true;
        self
    }

    pub fn saves(&self) -> usize {
        *self.save_count.borrow()
    }

    pub fn stored(&self) -> Catalog {
        self.stored.borrow().clone()
    }
}

impl CatalogStore for MockCatalogStore {
    fn load(&self) -> Catalog {
        self.stored.borrow().clone()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), AppError> {
        if *self.fail_saves.borrow() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "storage is read-only",
            )));
        }
        *self.stored.borrow_mut() = catalog.clone();
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }
}
