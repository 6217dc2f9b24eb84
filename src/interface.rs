use std::io::{self, BufRead, Write};

use anyhow::Result;
use humantime::format_duration;
use prettytable::Table;

use crate::model::{Schedule, Task};

/// Run the menu shell over stdin/stdout until the user exits.
pub fn run_shell(schedule: &mut Schedule, wrap: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), schedule, wrap)
}

/// The menu loop itself, over any line source and sink. Schedule errors
/// are printed and the loop carries on; only I/O failures bubble up.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    schedule: &mut Schedule,
    wrap: usize,
) -> Result<()> {
    loop {
        write!(
            output,
            "\n1. Add Task\n2. Remove Task\n3. View Tasks\n4. Exit\nChoose an option: "
        )?;
        output.flush()?;

        let choice = match read_line(&mut input)? {
            Some(choice) => choice,
            // input exhausted, same as picking Exit
            None => return Ok(()),
        };

        match choice.trim() {
            "1" => add_task(&mut input, &mut output, schedule)?,
            "2" => remove_task(&mut input, &mut output, schedule)?,
            "3" => view_tasks(&mut output, schedule, wrap)?,
            "4" => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

fn add_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    schedule: &mut Schedule,
) -> Result<()> {
    let description = match prompt(input, output, "Task Description: ")? {
        Some(value) => value,
        None => return Ok(()),
    };
    let start = match prompt(input, output, "Start Time (HH:MM): ")? {
        Some(value) => value,
        None => return Ok(()),
    };
    let end = match prompt(input, output, "End Time (HH:MM): ")? {
        Some(value) => value,
        None => return Ok(()),
    };
    let priority = match prompt(input, output, "Priority (High/Medium/Low): ")? {
        Some(value) => value,
        None => return Ok(()),
    };

    let task = match Task::new(&description, &start, &end, &priority) {
        Ok(task) => task,
        Err(err) => {
            writeln!(output, "Error: {}.", err)?;
            return Ok(());
        }
    };

    match schedule.add_task(task) {
        Ok(()) => writeln!(output, "Task added successfully.")?,
        Err(err) => writeln!(output, "Error: {}.", err)?,
    }
    Ok(())
}

fn remove_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    schedule: &mut Schedule,
) -> Result<()> {
    let description = match prompt(input, output, "Enter task description to remove: ")? {
        Some(value) => value,
        None => return Ok(()),
    };

    match schedule.remove_task(&description) {
        Ok(removed) => writeln!(output, "Removed: {}", removed)?,
        Err(err) => writeln!(output, "Error: {}.", err)?,
    }
    Ok(())
}

fn view_tasks<W: Write>(output: &mut W, schedule: &Schedule, wrap: usize) -> Result<()> {
    if schedule.is_empty() {
        writeln!(output, "No tasks scheduled for the day.")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["start", "end", "task", "priority", "length", "status"]);
    for task in schedule.sorted_tasks() {
        table.add_row(row![
            task.start().format("%H:%M"),
            task.end().format("%H:%M"),
            textwrap::fill(task.description(), wrap),
            task.priority(),
            window_length(task),
            task.status()
        ]);
    }
    table.print(output)?;
    Ok(())
}

// Human readable length of the task window, "-" when the window is
// inverted.
fn window_length(task: &Task) -> String {
    match task.end().signed_duration_since(task.start()).to_std() {
        Ok(length) => format_duration(length).to_string(),
        Err(_) => "-".to_string(),
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;
    read_line(input)
}

/// One line without its terminator, or `None` once the input is
/// exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(
        line.trim_end_matches(|c| c == '\n' || c == '\r').to_string(),
    ))
}
