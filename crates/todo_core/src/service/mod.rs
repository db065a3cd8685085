//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory collection and expose todo operations over it.
//! - Keep the presentation shell decoupled from storage details.

pub mod todo_service;
