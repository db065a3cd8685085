//! JSON file store.
//!
//! # Responsibility
//! - Read the whole todo document on load and overwrite it on save.
//! - Keep the document pretty-printed as an ordered array of objects.
//!
//! # Invariants
//! - A missing file loads as an empty collection.
//! - A present but malformed file is an error, never an empty collection.

use super::{validate_loaded, StoreError, StoreResult, TodoStore};
use crate::model::todo::Todo;
use log::{error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no location is configured.
pub const DEFAULT_DATA_FILE: &str = "todos.json";

/// File-backed store holding the collection as one JSON document.
#[derive(Debug, Clone)]
pub struct JsonTodoStore {
    path: PathBuf,
}

impl JsonTodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`DEFAULT_DATA_FILE`] relative to the working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StoreResult<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    // Encoding problems are document problems, so bytes go straight to serde.
    fn decode(&self, raw: &[u8]) -> StoreResult<Vec<Todo>> {
        let todos: Vec<Todo> = serde_json::from_slice(raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        validate_loaded(&todos)?;
        Ok(todos)
    }
}

impl Default for JsonTodoStore {
    fn default() -> Self {
        Self::default_location()
    }
}

impl TodoStore for JsonTodoStore {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        let started_at = Instant::now();
        let result = self
            .read_document()
            .and_then(|raw| match raw {
                Some(raw) => self.decode(&raw),
                None => Ok(Vec::new()),
            });

        match &result {
            Ok(todos) => info!(
                "event=store_load module=store status=ok path={} count={} duration_ms={}",
                self.path.display(),
                todos.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error path={} duration_ms={} error={}",
                self.path.display(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        let started_at = Instant::now();
        let mut document = serde_json::to_string_pretty(todos).map_err(StoreError::Serialize)?;
        document.push('\n');

        if let Err(source) = std::fs::write(&self.path, document) {
            error!(
                "event=store_save module=store status=error path={} duration_ms={} error={}",
                self.path.display(),
                started_at.elapsed().as_millis(),
                source
            );
            return Err(StoreError::Io {
                path: self.path.clone(),
                source,
            });
        }

        info!(
            "event=store_save module=store status=ok path={} count={} duration_ms={}",
            self.path.display(),
            todos.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
