use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::io::storage::{self, StorageError};
use crate::model::Task;

/// Due dates are typed at the prompt as day/month/year
const DUE_DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error("invalid date {0:?}: expected DD/MM/YYYY")]
    InvalidDateFormat(String),
    #[error("task number {number} is out of range (list has {len} tasks)")]
    IndexOutOfRange { number: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of a `complete` call on an in-bounds task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompleteOutcome {
    /// The task was pending and is now done
    Completed,
    /// The task was already done; nothing was written
    AlreadyCompleted,
}

/// Owns the in-memory task list and the file it persists to.
///
/// Every successful mutation is written through to disk before returning.
/// A failed write rolls the mutation back, so the list always matches the
/// last successfully saved state.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`. Missing or unreadable files yield an empty
    /// list (see [`storage::load_tasks`]); this never fails.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = storage::load_tasks(&path);
        TaskStore { path, tasks }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new pending task and persist.
    ///
    /// `due_date` is the raw prompt entry: `None` or blank means no due
    /// date, anything else must parse as `DD/MM/YYYY`.
    pub fn add(&mut self, text: &str, due_date: Option<&str>) -> Result<&Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let due = parse_due_date(due_date)?;

        let mut task = Task::new(text);
        task.due_date = due;
        task.added = Some(now_stamp());

        let idx = self.tasks.len();
        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(&self.tasks[idx])
    }

    /// Mark task `number` (1-based) as done and persist. Completing an
    /// already-done task reports `AlreadyCompleted` and touches nothing.
    pub fn complete(&mut self, number: usize) -> Result<CompleteOutcome, StoreError> {
        let idx = self.check_bounds(number)?;
        if self.tasks[idx].completed {
            return Ok(CompleteOutcome::AlreadyCompleted);
        }
        self.tasks[idx].completed = true;
        if let Err(e) = self.save() {
            self.tasks[idx].completed = false;
            return Err(e);
        }
        Ok(CompleteOutcome::Completed)
    }

    /// Remove task `number` (1-based) and persist; later tasks shift down
    /// one position. Returns the removed task.
    pub fn delete(&mut self, number: usize) -> Result<Task, StoreError> {
        let idx = self.check_bounds(number)?;
        let task = self.tasks.remove(idx);
        if let Err(e) = self.save() {
            self.tasks.insert(idx, task);
            return Err(e);
        }
        Ok(task)
    }

    /// Replace the text of task `number` (1-based) and persist. Completion
    /// state, due date, and added stamp are untouched.
    pub fn edit(&mut self, number: usize, new_text: &str) -> Result<&Task, StoreError> {
        let idx = self.check_bounds(number)?;
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let old = std::mem::replace(&mut self.tasks[idx].text, new_text.to_string());
        if let Err(e) = self.save() {
            self.tasks[idx].text = old;
            return Err(e);
        }
        Ok(&self.tasks[idx])
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn save(&self) -> Result<(), StoreError> {
        storage::save_tasks(&self.path, &self.tasks)?;
        Ok(())
    }

    /// Convert a 1-based task number into a list index, rejecting anything
    /// outside `[1, len]`.
    fn check_bounds(&self, number: usize) -> Result<usize, StoreError> {
        if number == 0 || number > self.tasks.len() {
            return Err(StoreError::IndexOutOfRange {
                number,
                len: self.tasks.len(),
            });
        }
        Ok(number - 1)
    }
}

fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, StoreError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DUE_DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| StoreError::InvalidDateFormat(raw.to_string()))
}

fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M").to_string()
}
