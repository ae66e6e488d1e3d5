use chrono::NaiveDate;

use crate::model::Task;

/// Sort order for the view screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// The list's natural insertion order
    #[default]
    Entry,
    /// Ascending by due date; undated tasks sort after all dated ones
    DueDate,
}

impl SortKey {
    pub fn toggle(self) -> SortKey {
        match self {
            SortKey::Entry => SortKey::DueDate,
            SortKey::DueDate => SortKey::Entry,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Entry => "entry order",
            SortKey::DueDate => "due date",
        }
    }
}

/// Which tasks the view screen shows. Every toggle defaults to "show"; the
/// four filters are independent and AND-combined, so a task must pass all
/// of them to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_completed: bool,
    pub show_incomplete: bool,
    pub show_past_due: bool,
    pub show_no_due_date: bool,
    pub sort: SortKey,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            show_completed: true,
            show_incomplete: true,
            show_past_due: true,
            show_no_due_date: true,
            sort: SortKey::Entry,
        }
    }
}

/// Derive the display rows for the current options, without touching the
/// list. Each row carries the task's zero-based position in `tasks` so a
/// selection on screen can be resolved back to a store index.
pub fn build_view<'a>(
    tasks: &'a [Task],
    options: &ViewOptions,
    today: NaiveDate,
) -> Vec<(usize, &'a Task)> {
    let mut rows: Vec<(usize, &Task)> = tasks.iter().enumerate().collect();
    if options.sort == SortKey::DueDate {
        // Stable: ties and the undated tail keep their insertion order
        rows.sort_by_key(|(_, t)| (t.due_date.is_none(), t.due_date));
    }
    rows.retain(|(_, t)| passes(t, options, today));
    rows
}

fn passes(task: &Task, options: &ViewOptions, today: NaiveDate) -> bool {
    if task.completed && !options.show_completed {
        return false;
    }
    if !task.completed && !options.show_incomplete {
        return false;
    }
    if task.is_past_due(today) && !options.show_past_due {
        return false;
    }
    if task.due_date.is_none() && !options.show_no_due_date {
        return false;
    }
    true
}

/// Counts over the whole list, independent of any active filters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

pub fn list_stats(tasks: &[Task]) -> ListStats {
    let mut stats = ListStats::default();
    for task in tasks {
        stats.total += 1;
        if task.completed {
            stats.done += 1;
        } else {
            stats.pending += 1;
        }
    }
    stats
}
