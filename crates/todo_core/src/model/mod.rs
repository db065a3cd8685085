//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the fixed-field record persisted by the store.
//! - Keep priority as a closed enum instead of free-form text.
//!
//! # Invariants
//! - Collection order is insertion order and doubles as display order.
//! - `created_at` is captured once at creation and never rewritten.

pub mod todo;
