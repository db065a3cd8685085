//! Todo use-case service.
//!
//! # Responsibility
//! - Provide add/list/complete/delete/search/stats over the working copy.
//! - Persist the full collection after every successful mutation.
//!
//! # Invariants
//! - The service is the only mutator of the collection.
//! - Reads never call the store.
//! - A mutation whose save fails is undone in memory before the error returns.
//! - New ids are `len + 1`; after a deletion this can repeat a live id.

use crate::model::todo::{Priority, Todo, TodoId};
use crate::store::{StoreError, TodoStore};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, TodoServiceError>;

/// Service error for todo use-cases.
#[derive(Debug)]
pub enum TodoServiceError {
    /// No todo carries the requested id. Nothing was changed.
    NotFound(TodoId),
    /// Persistence failed. The in-memory change was rolled back.
    Store(StoreError),
}

impl Display for TodoServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo #{id} not found"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TodoServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for TodoServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Read result for `list` and `search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Nothing to show.
    Empty,
    /// Matching todos in collection order. Never empty.
    Items(Vec<&'a Todo>),
}

impl<'a> Listing<'a> {
    fn from_items(items: Vec<&'a Todo>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn items(&self) -> &[&'a Todo] {
        match self {
            Self::Empty => &[],
            Self::Items(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }
}

/// Completion counters over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Todo service over a store implementation.
pub struct TodoService<S: TodoStore> {
    store: S,
    todos: Vec<Todo>,
}

impl<S: TodoStore> TodoService<S> {
    /// Loads the persisted collection and wraps it.
    ///
    /// # Errors
    /// - Returns the store error unchanged when the document is unreadable or
    ///   malformed. Callers should treat this as fatal.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let todos = store.load()?;
        info!(
            "event=service_open module=service status=ok count={}",
            todos.len()
        );
        Ok(Self { store, todos })
    }

    /// Wraps an already loaded collection without touching the store.
    pub fn from_parts(store: S, todos: Vec<Todo>) -> Self {
        Self { store, todos }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The working collection in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// First todo with `id`, in collection order.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Adds a todo, normalizing unrecognized `priority` text to `medium`.
    pub fn add(&mut self, title: impl Into<String>, priority: &str) -> ServiceResult<Todo> {
        self.add_with_priority(title, Priority::from_input(priority))
    }

    /// Adds a pending todo and persists the collection.
    ///
    /// # Contract
    /// - `id = len + 1` at the time of the call.
    /// - Returns the created record.
    pub fn add_with_priority(
        &mut self,
        title: impl Into<String>,
        priority: Priority,
    ) -> ServiceResult<Todo> {
        let id = self.next_id();
        let todo = Todo::new(id, title, priority);
        self.todos.push(todo.clone());

        if let Err(err) = self.persist("todo_add", id) {
            self.todos.pop();
            return Err(err);
        }
        Ok(todo)
    }

    /// Todos in display order, or `Listing::Empty`.
    pub fn list(&self) -> Listing<'_> {
        Listing::from_items(self.todos.iter().collect())
    }

    /// Marks the first todo with `id` as completed and persists.
    ///
    /// Completing an already completed todo still persists.
    pub fn complete(&mut self, id: TodoId) -> ServiceResult<Todo> {
        let index = self.position(id).ok_or(TodoServiceError::NotFound(id))?;
        let was_completed = self.todos[index].completed;
        self.todos[index].mark_completed();

        if let Err(err) = self.persist("todo_complete", id) {
            self.todos[index].completed = was_completed;
            return Err(err);
        }
        Ok(self.todos[index].clone())
    }

    /// Removes the first todo with `id` and persists.
    ///
    /// Returns the removed record.
    pub fn delete(&mut self, id: TodoId) -> ServiceResult<Todo> {
        let index = self.position(id).ok_or(TodoServiceError::NotFound(id))?;
        let removed = self.todos.remove(index);

        if let Err(err) = self.persist("todo_delete", id) {
            self.todos.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    /// Case-insensitive substring search on titles, in collection order.
    pub fn search(&self, keyword: &str) -> Listing<'_> {
        let needle = keyword.to_lowercase();
        Listing::from_items(
            self.todos
                .iter()
                .filter(|todo| todo.title_contains(&needle))
                .collect(),
        )
    }

    pub fn stats(&self) -> TodoStats {
        let total = self.todos.len();
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    fn next_id(&self) -> TodoId {
        self.todos.len() as TodoId + 1
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    fn persist(&self, event: &str, id: TodoId) -> ServiceResult<()> {
        match self.store.save(&self.todos) {
            Ok(()) => {
                info!("event={event} module=service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                error!(
                    "event={event} module=service status=error id={id} error_code=save_failed error={err}"
                );
                Err(err.into())
            }
        }
    }
}
