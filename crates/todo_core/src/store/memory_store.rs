//! In-process store.
//!
//! Holds the last saved snapshot in memory and counts `save` calls, so callers
//! can observe exactly when the service persists.

use super::{validate_loaded, StoreError, StoreResult, TodoStore};
use crate::model::todo::Todo;
use std::cell::{Cell, RefCell};
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;

/// Memory-backed store. Not shareable across threads.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    snapshot: RefCell<Vec<Todo>>,
    save_count: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with an existing persisted collection.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            snapshot: RefCell::new(todos),
            ..Self::default()
        }
    }

    /// Copy of the last successfully saved collection.
    pub fn snapshot(&self) -> Vec<Todo> {
        self.snapshot.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// Makes every following `save` fail with a permission error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl TodoStore for MemoryTodoStore {
    fn load(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.snapshot();
        validate_loaded(&todos)?;
        Ok(todos)
    }

    fn save(&self, todos: &[Todo]) -> StoreResult<()> {
        if self.fail_saves.get() {
            return Err(StoreError::Io {
                path: PathBuf::from("<memory>"),
                source: IoError::new(ErrorKind::PermissionDenied, "memory store is read-only"),
            });
        }
        *self.snapshot.borrow_mut() = todos.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
