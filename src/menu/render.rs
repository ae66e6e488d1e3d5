use std::io;

use chrono::NaiveDate;
use crossterm::{cursor, execute, terminal};

use crate::model::Task;
use crate::ops::{ListStats, ViewOptions, build_view, list_stats};
use crate::util::unicode::{pad_to_width, truncate_to_width};

/// Cells reserved for task text before the due column
pub const TEXT_WIDTH: usize = 40;

pub const MAIN_MENU: &str = "\
1. Add task
2. View tasks
3. Complete task
4. Delete task
5. Edit task
6. Exit";

pub const VIEW_HELP: &str =
    "[c] completed  [i] incomplete  [p] past-due  [n] no-due-date  [s] sort  [q] back";

const BANNER_ART: &str = r"  _      _
 | |_ __| |
 | __/ _` |
 | |_ (_| |
  \__\__,_|";

/// The startup banner: wordmark plus a version line.
pub fn banner() -> String {
    format!(
        "{}\n\n td v{} - a to-do list in your terminal\n",
        BANNER_ART,
        env!("CARGO_PKG_VERSION")
    )
}

/// Clear the screen and home the cursor. Callers only do this when stdout
/// is a terminal.
pub fn clear_screen() -> io::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

/// One list row: right-aligned task number, checkbox, text, and when dated
/// an aligned due column with a past-due marker.
pub fn format_task_row(number: usize, task: &Task, today: NaiveDate) -> String {
    let text = truncate_to_width(&task.text, TEXT_WIDTH);
    match task.due_date {
        Some(due) => {
            let mut row = format!(
                "{:>3}. [{}] {}  due {}",
                number,
                task.checkbox_char(),
                pad_to_width(&text, TEXT_WIDTH),
                due
            );
            if task.is_past_due(today) {
                row.push_str(" (past due)");
            }
            row
        }
        None => format!("{:>3}. [{}] {}", number, task.checkbox_char(), text),
    }
}

pub fn format_stats_line(stats: &ListStats) -> String {
    format!(
        "tasks: {} total, {} done, {} pending",
        stats.total, stats.done, stats.pending
    )
}

pub fn format_filter_line(options: &ViewOptions) -> String {
    format!(
        "filters: completed {}, incomplete {}, past-due {}, no-due-date {}",
        on_off(options.show_completed),
        on_off(options.show_incomplete),
        on_off(options.show_past_due),
        on_off(options.show_no_due_date)
    )
}

pub fn format_sort_line(options: &ViewOptions) -> String {
    format!("sort: {}", options.sort.label())
}

/// Assemble the full view screen: stats header, filtered rows (numbered by
/// their true list position), and the filter/sort footer.
pub fn render_view_screen(tasks: &[Task], options: &ViewOptions, today: NaiveDate) -> Vec<String> {
    let stats = list_stats(tasks);
    let rows = build_view(tasks, options, today);

    let mut lines = Vec::new();
    let mut header = format_stats_line(&stats);
    if rows.len() != stats.total {
        header.push_str(&format!(" ({} shown)", rows.len()));
    }
    lines.push(header);
    lines.push(String::new());

    if rows.is_empty() {
        lines.push("No tasks match the current filters.".to_string());
    } else {
        for (idx, task) in &rows {
            lines.push(format_task_row(idx + 1, task, today));
        }
    }

    lines.push(String::new());
    lines.push(format_filter_line(options));
    lines.push(format_sort_line(options));
    lines.push(VIEW_HELP.to_string());
    lines
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}
