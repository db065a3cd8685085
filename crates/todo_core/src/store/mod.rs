//! Persistence boundary for the todo collection.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract used by the service.
//! - Isolate file format details from service orchestration.
//!
//! # Invariants
//! - `save` always writes a full snapshot; there are no partial updates.
//! - Read paths reject invalid persisted state instead of masking it.
//! - No locking: concurrent writers to one location are last-writer-wins.

use crate::model::todo::{Todo, TodoValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_store;
pub mod memory_store;

pub use json_store::{JsonTodoStore, DEFAULT_DATA_FILE};
pub use memory_store::MemoryTodoStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for loading and saving the collection.
#[derive(Debug)]
pub enum StoreError {
    /// The location could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted data exists but is not a valid todo document.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The collection could not be encoded.
    Serialize(serde_json::Error),
    /// Persisted data parsed but violates record invariants.
    InvalidData(String),
}

impl StoreError {
    /// Whether this error means the persisted document itself is unusable.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidData(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error at `{}`: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "malformed todo file `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode todos: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

/// Whole-collection persistence contract.
pub trait TodoStore {
    /// Returns the persisted collection, or an empty one when nothing exists yet.
    fn load(&self) -> StoreResult<Vec<Todo>>;
    /// Overwrites the persisted collection with `todos`.
    fn save(&self, todos: &[Todo]) -> StoreResult<()>;
}

impl<S: TodoStore + ?Sized> TodoStore for &S {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        (**self).load()
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        (**self).save(todos)
    }
}

pub(crate) fn validate_loaded(todos: &[Todo]) -> StoreResult<()> {
    for todo in todos {
        todo.validate()?;
    }
    Ok(())
}
