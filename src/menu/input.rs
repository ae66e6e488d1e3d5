use std::io::{self, BufRead, Write};

const MSG_NOT_POSITIVE: &str = "Task number must be a positive integer.";
const MSG_NOT_A_NUMBER: &str = "Invalid input. Please enter a valid number.";

/// Print a prompt (no trailing newline) and read one line. None means the
/// input stream ended.
pub fn prompt_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    read_line()
}

/// Read one line from stdin, stripping the line ending. None at EOF.
pub fn read_line() -> io::Result<Option<String>> {
    let mut buf = String::new();
    let n = io::stdin().lock().read_line(&mut buf)?;
    if n == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

/// Prompt until a non-blank line is entered. None means EOF.
pub fn prompt_nonempty(prompt: &str) -> io::Result<Option<String>> {
    loop {
        let Some(line) = prompt_line(prompt)? else {
            return Ok(None);
        };
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
        println!("Task cannot be empty.");
    }
}

/// Prompt for a 1-based task number, re-prompting on anything non-numeric
/// or non-positive. None means EOF. Range checking is left to the store.
pub fn prompt_task_number() -> io::Result<Option<usize>> {
    loop {
        let Some(line) = prompt_line("Enter task number: ")? else {
            return Ok(None);
        };
        match parse_task_number(&line) {
            Ok(n) => return Ok(Some(n)),
            Err(msg) => println!("{}", msg),
        }
    }
}

/// Parse a task-number entry, mapping each failure to its re-prompt message.
fn parse_task_number(line: &str) -> Result<usize, &'static str> {
    let line = line.trim();
    match line.parse::<usize>() {
        Ok(0) => Err(MSG_NOT_POSITIVE),
        Ok(n) => Ok(n),
        // "-3" is numeric but not positive; everything else is not a number
        Err(_) if line.parse::<i64>().is_ok() => Err(MSG_NOT_POSITIVE),
        Err(_) => Err(MSG_NOT_A_NUMBER),
    }
}
