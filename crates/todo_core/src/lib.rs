//! Core logic for a single-user todo list.
//! This crate owns the todo record, its JSON persistence and every operation
//! over the collection.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{Priority, Todo, TodoId, TodoValidationError, CREATED_AT_FORMAT};
pub use service::todo_service::{
    Listing, ServiceResult, TodoService, TodoServiceError, TodoStats,
};
pub use store::{
    JsonTodoStore, MemoryTodoStore, StoreError, StoreResult, TodoStore, DEFAULT_DATA_FILE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
