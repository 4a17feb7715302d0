//! JSON file backend for the catalog.
//!
//! The file holds a single pretty-printed object keyed by movie name and is
//! rewritten in full on every save. Entries that do not describe a valid
//! record are skipped on load so the remaining movies survive the next save.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::domain::{AppError, Catalog, Record};
use crate::ports::CatalogStore;

const INDENT: &[u8] = b"    ";

/// Why a stored catalog could not be read.
#[derive(Debug)]
pub enum LoadError {
    /// Backing file does not exist.
    Missing,
    /// File exists but could not be read, is not JSON, or is not a JSON object.
    Malformed(String),
}

/// Catalog store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogStore {
    path: PathBuf,
}

impl JsonFileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file, reporting why it failed.
    ///
    /// Each entry is converted on its own; entries that are not a valid record
    /// are logged and left out.
    pub fn read(&self) -> Result<Catalog, LoadError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(LoadError::Missing),
            Err(err) => return Err(LoadError::Malformed(err.to_string())),
        };
        let entries: BTreeMap<String, Value> =
            serde_json::from_str(&content).map_err(|err| LoadError::Malformed(err.to_string()))?;

        Ok(entries
            .into_iter()
            .filter_map(|(name, value)| match serde_json::from_value::<Record>(value) {
                Ok(record) => Some((name, record)),
                Err(err) => {
                    log::warn!(
                        "Skipping invalid entry '{}' in {}: {}",
                        name,
                        self.path.display(),
                        err
                    );
                    None
                }
            })
            .collect())
    }
}

impl CatalogStore for JsonFileCatalogStore {
    fn load(&self) -> Catalog {
        match self.read() {
            Ok(catalog) => {
                log::debug!("Loaded {} movie(s) from {}", catalog.len(), self.path.display());
                catalog
            }
            Err(LoadError::Missing) => {
                log::warn!(
                    "Could not load data: {} not found. Starting with an empty catalog.",
                    self.path.display()
                );
                Catalog::new()
            }
            Err(LoadError::Malformed(reason)) => {
                log::warn!(
                    "Could not load data from {}: {}. Starting with an empty catalog.",
                    self.path.display(),
                    reason
                );
                Catalog::new()
            }
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), AppError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        catalog.serialize(&mut serializer)?;

        let mut file = fs::File::create(&self.path)?;
        file.write_all(&buf)?;
        log::debug!("Saved {} movie(s) to {}", catalog.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewMovie;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, JsonFileCatalogStore) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let store = JsonFileCatalogStore::new(dir.path().join("data.json"));
        (dir, store)
    }

    fn inception() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(NewMovie::new("Inception", 2010, 8.8, "Sci-Fi").unwrap()).unwrap();
        catalog
    }

    #[test]
    fn missing_file_loads_empty_catalog() {
        let (_dir, store) = test_store();
        assert!(matches!(store.read(), Err(LoadError::Missing)));
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty_catalog() {
        let (_dir, store) = test_store();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.read(), Err(LoadError::Malformed(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let (_dir, store) = test_store();
        fs::write(store.path(), r#"["Inception", "Alien"]"#).unwrap();
        assert!(matches!(store.read(), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn invalid_entry_is_skipped_and_others_survive_save() {
        let (_dir, store) = test_store();
        fs::write(
            store.path(),
            r#"{
                "Alien": {"rating": 8.5, "year": 1979, "genre": "Horror"},
                "Heat": {"rating": 8.3, "year": 1995, "genre": "Crime"},
                "Cats": {"rating": 2.0, "year": "2019", "genre": "Musical"},
                "Dune": {"rating": 7.0, "year": 2021, "genre": null}
            }"#,
        )
        .unwrap();

        let mut catalog = store.load();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Cats").is_none());
        assert!(catalog.get("Dune").is_none());

        catalog.insert(NewMovie::new("Inception", 2010, 8.8, "Sci-Fi").unwrap()).unwrap();
        store.save(&catalog).unwrap();

        let reloaded = store.load();
        assert_eq!(reloaded.get("Alien"), Some(&Record::new(8.5, 1979, "Horror")));
        assert_eq!(reloaded.get("Heat"), Some(&Record::new(8.3, 1995, "Crime")));
        assert!(reloaded.get("Inception").is_some());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (_dir, store) = test_store();
        let catalog = inception();

        store.save(&catalog).unwrap();
        assert_eq!(store.load(), catalog);
    }

    #[test]
    fn save_writes_four_space_pretty_json() {
        let (_dir, store) = test_store();
        store.save(&inception()).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            content,
            concat!(
                "{\n",
                "    \"Inception\": {\n",
                "        \"rating\": 8.8,\n",
                "        \"year\": 2010,\n",
                "        \"genre\": \"Sci-Fi\"\n",
                "    }\n",
                "}",
            )
        );
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, store) = test_store();
        store.save(&inception()).unwrap();
        store.save(&Catalog::new()).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileCatalogStore::new(dir.path().join("absent").join("data.json"));

        let err = store.save(&inception()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn loads_file_written_by_hand() {
        let (_dir, store) = test_store();
        fs::write(
            store.path(),
            r#"{
                "Alien": {"rating": 8, "year": 1979, "genre": "Horror"},
                "Heat": {"rating": 8.3, "year": 1995}
            }"#,
        )
        .unwrap();

        let catalog = store.load();
        assert_eq!(catalog.get("Alien"), Some(&Record::new(8.0, 1979, "Horror")));
        assert_eq!(catalog.get("Heat"), Some(&Record::new(8.3, 1995, "")));
    }

    proptest! {
        #[test]
        fn arbitrary_catalog_roundtrips(
            entries in prop::collection::btree_map(
                "[A-Za-z0-9 :'-]{1,24}",
                (0u32..=100, 1880i32..2100, "[A-Za-z-]{0,12}"),
                0..12,
            )
        ) {
            let (_dir, store) = test_store();
            let catalog: Catalog = entries
                .into_iter()
                .map(|(name, (tenths, year, genre))| {
                    (name, Record::new(f64::from(tenths) / 10.0, year, genre))
                })
                .collect();

            store.save(&catalog).unwrap();
            prop_assert_eq!(store.load(), catalog);
        }
    }
}
