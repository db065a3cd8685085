//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Carry the data file location and logging settings in one value.
//! - Resolve paths into the shapes the store and logger expect.

use crate::logging::default_log_level;
use crate::store::{JsonTodoStore, DEFAULT_DATA_FILE};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON document holding the collection.
    pub data_file: PathBuf,
    pub log_level: String,
    /// Rolling log directory. Logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Absolute log directory, joining relative values onto `cwd`.
    pub fn resolved_log_dir(&self, cwd: &Path) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| {
            if dir.is_absolute() {
                dir.clone()
            } else {
                cwd.join(dir)
            }
        })
    }

    pub fn open_store(&self) -> JsonTodoStore {
        JsonTodoStore::new(self.data_file.clone())
    }
}
