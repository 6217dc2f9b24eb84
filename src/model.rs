use chrono::NaiveTime;
use std::fmt;
use thiserror::Error;

/// Everything that can go wrong while operating on the schedule. All of
/// these are recoverable: the schedule is left as it was and the caller
/// decides what to tell the user.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    /// The new task's time window overlaps an already scheduled task.
    #[error("task conflicts with \"{with}\"")]
    Conflict { with: String },

    /// No scheduled task carries the given description.
    #[error("no task named \"{description}\"")]
    NotFound { description: String },

    /// A time field could not be read as a clock time.
    #[error("invalid time \"{value}\", expected HH:MM")]
    InvalidTime { value: String },
}

/// A single time-boxed task of the day.
///
/// The descriptive fields are fixed at construction; only the completion
/// flag changes afterwards, through [`Task::mark_completed`].
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    start: NaiveTime,
    end: NaiveTime,
    priority: String,
    completed: bool,
}

impl Task {
    /// Build a task from its four raw fields, pending completion. The
    /// time fields are parsed into clock times here, so ordering and
    /// overlap checks never depend on how the input was padded.
    /// Description and priority are taken as given, empty or not.
    pub fn new(
        description: &str,
        start: &str,
        end: &str,
        priority: &str,
    ) -> Result<Task, ScheduleError> {
        Ok(Task {
            description: description.to_string(),
            start: parse_time(start)?,
            end: parse_time(end)?,
            priority: priority.to_string(),
            completed: false,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flag the task as completed. Calling it again changes nothing.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} [{}] ({})",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.description,
            self.priority,
            self.status()
        )
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ScheduleError::InvalidTime {
        value: value.to_string(),
    })
}

/// The schedule of the day: every accepted task, held in the order the
/// tasks were added. One schedule exists per run, owned by whoever
/// drives it.
#[derive(Debug, Default)]
pub struct Schedule {
    tasks: Vec<Task>,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule { tasks: Vec::new() }
    }

    /// Add a task, unless its [start, end) window overlaps a task that
    /// is already scheduled. Windows that merely touch do not overlap.
    /// On rejection the schedule is unchanged and the error names the
    /// first task found in the way.
    pub fn add_task(&mut self, task: Task) -> Result<(), ScheduleError> {
        if let Some(existing) = self.first_conflict(&task) {
            return Err(ScheduleError::Conflict {
                with: existing.description().to_string(),
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the first task whose description matches, ignoring case.
    /// The whole description has to match, not a fragment of it. The
    /// removed task is handed back so the caller can report it. When
    /// several tasks share a description, the one added earliest goes.
    pub fn remove_task(&mut self, description: &str) -> Result<Task, ScheduleError> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.description().eq_ignore_ascii_case(description));
        match position {
            Some(index) => Ok(self.tasks.remove(index)),
            None => Err(ScheduleError::NotFound {
                description: description.to_string(),
            }),
        }
    }

    /// The scheduled tasks ordered by start time, tasks starting at the
    /// same time keeping their insertion order. This is a plain read:
    /// the stored order stays the insertion order, so removal by
    /// description keeps matching in the order tasks were added.
    pub fn sorted_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|task| task.start());
        tasks
    }

    /// The scheduled tasks in the order they were added.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    // First stored task whose window overlaps the candidate's, if any.
    fn first_conflict(&self, candidate: &Task) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|task| task.start() < candidate.end() && candidate.start() < task.end())
    }
}
