use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item as stored on disk.
///
/// The wire format is a JSON object with keys `task`, `completed`, and
/// optionally `due_date` (ISO `YYYY-MM-DD`) and `added`. Optional fields are
/// omitted entirely when absent; `completed` is always written but tolerated
/// if missing on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task description, non-empty after trimming
    #[serde(rename = "task")]
    pub text: String,
    /// Whether the task has been marked done
    #[serde(default)]
    pub completed: bool,
    /// Optional due date (date only, no time component)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Informational creation timestamp (`YYYY-MM-DD HH:MM`, local time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<String>,
}

impl Task {
    /// Create a pending task with no due date and no creation stamp
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
            due_date: None,
            added: None,
        }
    }

    /// A task is past due when it has a due date that is today or earlier
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        matches!(self.due_date, Some(due) if due <= today)
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}
