mod mock_catalog_store;

#[allow(unused_imports)]
pub use mock_catalog_store::MockCatalogStore;
