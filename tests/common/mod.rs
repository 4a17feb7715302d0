//! Shared testing utilities for moviedb CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used as the binary's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `moviedb` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("moviedb").expect("Failed to locate moviedb binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("MOVIEDB_DATA")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Default catalog file in the work directory.
    pub fn data_path(&self) -> PathBuf {
        self.work_dir.join("data.json")
    }

    /// Seed the default catalog file with raw content.
    pub fn write_data(&self, content: &str) {
        fs::write(self.data_path(), content).expect("Failed to write data.json");
    }

    /// Seed the default catalog file with a JSON value.
    pub fn write_catalog(&self, catalog: &Value) {
        self.write_data(&serde_json::to_string_pretty(catalog).expect("serialize catalog"));
    }

    /// Parse the default catalog file.
    pub fn read_catalog(&self) -> Value {
        self.read_catalog_at(&self.data_path())
    }

    /// Parse a catalog file at an arbitrary path.
    pub fn read_catalog_at(&self, path: &Path) -> Value {
        let content = fs::read_to_string(path).expect("catalog file should exist");
        serde_json::from_str(&content).expect("catalog file should be valid JSON")
    }

    /// Add a movie through the CLI and assert success.
    pub fn add_movie(&self, name: &str, year: i32, rating: &str, genre: &str) {
        self.cli()
            .args(["add", name, "--year", &year.to_string(), "--rating", rating, "--genre", genre])
            .assert()
            .success();
    }
}
