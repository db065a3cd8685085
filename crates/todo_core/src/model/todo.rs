//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical `Todo` record and its `Priority` enum.
//! - Provide creation and completion helpers plus persisted-shape validation.
//!
//! # Invariants
//! - `completed` only moves from `false` to `true`.
//! - `created_at` always has the shape `YYYY-MM-DD HH:MM:SS`.
//! - Unknown priority text is normalized to `Priority::Medium`.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `strftime` pattern used for `created_at`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static CREATED_AT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid created_at regex")
});

/// Positive integer identifier, assigned as `len + 1` at creation time.
pub type TodoId = u64;

/// Todo urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Parses one of `high|medium|low`, ignoring case and surrounding spaces.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Parses user input, falling back to `Medium` for anything unrecognized.
    pub fn from_input(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Persisted files written by older tools may carry arbitrary priority text.
impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from_input(&value)
    }
}

/// Validation failure for a persisted or constructed todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Ids start at 1.
    ZeroId,
    /// `created_at` does not match `YYYY-MM-DD HH:MM:SS`.
    InvalidCreatedAt { id: TodoId, value: String },
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "todo id must be a positive integer"),
            Self::InvalidCreatedAt { id, value } => write!(
                f,
                "todo #{id} has created_at `{value}`; expected YYYY-MM-DD HH:MM:SS"
            ),
        }
    }
}

impl Error for TodoValidationError {}

/// A single task record.
///
/// Field names and order match the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    /// Local wall-clock time, formatted with [`CREATED_AT_FORMAT`].
    pub created_at: String,
}

impl Todo {
    /// Creates a pending todo stamped with the current local time.
    pub fn new(id: TodoId, title: impl Into<String>, priority: Priority) -> Self {
        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();
        Self::with_created_at(id, title, priority, created_at)
    }

    /// Creates a pending todo with a caller-provided timestamp.
    ///
    /// Does not validate `created_at`; call [`Todo::validate`] when the value
    /// comes from outside the process.
    pub fn with_created_at(
        id: TodoId,
        title: impl Into<String>,
        priority: Priority,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            priority,
            created_at: created_at.into(),
        }
    }

    /// Marks this todo as done. Calling it again is a no-op.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Case-insensitive substring match against the title.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }

    /// Checks the invariants every persisted record must hold.
    ///
    /// Empty titles are accepted.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id == 0 {
            return Err(TodoValidationError::ZeroId);
        }
        if !CREATED_AT_RE.is_match(&self.created_at) {
            return Err(TodoValidationError::InvalidCreatedAt {
                id: self.id,
                value: self.created_at.clone(),
            });
        }
        Ok(())
    }
}
