pub mod input;
pub mod render;

pub use render::banner;

use std::io::{self, IsTerminal};

use chrono::Local;

use crate::ops::{CompleteOutcome, StoreError, TaskStore, ViewOptions};

/// Run the interactive menu until the user exits or input ends.
///
/// When stdout is a terminal the screen is cleared between actions and a
/// pause prompt is shown; with piped output the transcript stays plain so
/// sessions can be scripted.
pub fn run(store: &mut TaskStore) -> io::Result<()> {
    let interactive = io::stdout().is_terminal();
    loop {
        if interactive {
            render::clear_screen()?;
        }
        println!();
        println!("{}", render::MAIN_MENU);
        let Some(choice) = input::prompt_line("Choose an option: ")? else {
            return Ok(());
        };
        let pause_after = match choice.trim() {
            "1" => {
                add_flow(store)?;
                true
            }
            "2" => {
                view_flow(store, interactive)?;
                false
            }
            "3" => {
                complete_flow(store)?;
                true
            }
            "4" => {
                delete_flow(store)?;
                true
            }
            "5" => {
                edit_flow(store)?;
                true
            }
            "6" => {
                println!("Bye.");
                return Ok(());
            }
            _ => {
                println!("Invalid choice. Please try again.");
                true
            }
        };
        if interactive && pause_after {
            pause()?;
        }
    }
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

fn add_flow(store: &mut TaskStore) -> io::Result<()> {
    let Some(text) = input::prompt_nonempty("Enter task: ")? else {
        return Ok(());
    };
    let Some(due) = input::prompt_line("Due date (DD/MM/YYYY, blank for none): ")? else {
        return Ok(());
    };
    match store.add(&text, Some(&due)) {
        Ok(task) => println!("Added task: '{}'", task.text),
        Err(e) => report_error(&e),
    }
    Ok(())
}

/// The interactive view screen: re-renders after every filter or sort
/// command until the user backs out.
fn view_flow(store: &TaskStore, interactive: bool) -> io::Result<()> {
    if store.is_empty() {
        println!("No tasks in your to-do list.");
        return Ok(());
    }
    let mut options = ViewOptions::default();
    loop {
        if interactive {
            render::clear_screen()?;
        }
        println!();
        let today = Local::now().date_naive();
        for line in render::render_view_screen(store.tasks(), &options, today) {
            println!("{}", line);
        }
        let Some(command) = input::prompt_line("view> ")? else {
            return Ok(());
        };
        match command.trim() {
            "c" => options.show_completed = !options.show_completed,
            "i" => options.show_incomplete = !options.show_incomplete,
            "p" => options.show_past_due = !options.show_past_due,
            "n" => options.show_no_due_date = !options.show_no_due_date,
            "s" => options.sort = options.sort.toggle(),
            "q" => return Ok(()),
            "" => {}
            _ => println!("Unknown key."),
        }
    }
}

fn complete_flow(store: &mut TaskStore) -> io::Result<()> {
    let Some(number) = select_task(store)? else {
        return Ok(());
    };
    match store.complete(number) {
        Ok(CompleteOutcome::Completed) => {
            println!("Completed task: '{}'", store.tasks()[number - 1].text);
        }
        Ok(CompleteOutcome::AlreadyCompleted) => println!("Task is already completed."),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn delete_flow(store: &mut TaskStore) -> io::Result<()> {
    let Some(number) = select_task(store)? else {
        return Ok(());
    };
    match store.delete(number) {
        Ok(task) => println!("Deleted task: '{}'", task.text),
        Err(e) => report_error(&e),
    }
    Ok(())
}

fn edit_flow(store: &mut TaskStore) -> io::Result<()> {
    let Some(number) = select_task(store)? else {
        return Ok(());
    };
    let Some(new_text) = input::prompt_nonempty("Enter new text: ")? else {
        return Ok(());
    };
    match store.edit(number, &new_text) {
        Ok(task) => println!("Updated task to: '{}'", task.text),
        Err(e) => report_error(&e),
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Shared preamble for the number-driven actions: refuse on an empty list,
/// print the numbered list, prompt for a task number.
fn select_task(store: &TaskStore) -> io::Result<Option<usize>> {
    if store.is_empty() {
        println!("No tasks in your to-do list.");
        return Ok(None);
    }
    print_list(store);
    input::prompt_task_number()
}

fn print_list(store: &TaskStore) {
    let today = Local::now().date_naive();
    for (i, task) in store.tasks().iter().enumerate() {
        println!("{}", render::format_task_row(i + 1, task, today));
    }
}

/// Validation problems are part of the conversation and go to stdout;
/// storage failures go to stderr.
fn report_error(e: &StoreError) {
    match e {
        StoreError::Storage(_) => eprintln!("error: {}", e),
        _ => println!("{}", e),
    }
}

fn pause() -> io::Result<()> {
    let _ = input::prompt_line("Press enter to continue")?;
    Ok(())
}
