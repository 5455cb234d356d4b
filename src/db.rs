//! In-memory task store and input normalisation helpers.
//!
//! This module provides the `Database` struct that owns every task of the
//! running session together with the id counter, along with the helpers used
//! to turn raw prompt answers into task fields.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{TaskError, ValidationError};
use crate::fields::*;
use crate::task::Task;

/// Date pattern accepted for due dates and used when displaying dates.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Result of a successful status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: u64,
    pub from: Status,
    pub to: Status,
}

/// In-memory database holding the tasks of one session.
#[derive(Debug)]
pub struct Database {
    tasks: Vec<Task>,
    next_id: u64,
    today: fn() -> NaiveDate,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl Database {
    /// Create an empty database stamping tasks with the local date.
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Create an empty database with a custom source for "today".
    pub fn with_clock(today: fn() -> NaiveDate) -> Self {
        Database {
            tasks: Vec::new(),
            next_id: 1,
            today,
        }
    }

    /// Validate the raw answers and append a new open task.
    ///
    /// Fields are checked in prompt order (title, due date, priority). On any
    /// error the store is left untouched and no id is consumed.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        due: &str,
        priority: &str,
        tags: &str,
    ) -> Result<&Task, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let due = due.trim();
        let due = if due.is_empty() {
            None
        } else {
            Some(parse_due_input(due).ok_or_else(|| ValidationError::BadDate(due.to_string()))?)
        };

        let priority = priority.trim().to_lowercase();
        let priority = if priority.is_empty() {
            None
        } else {
            Some(parse_priority(&priority).ok_or(ValidationError::BadPriority(priority))?)
        };

        let id = self.next_id;
        let task = Task {
            id,
            title: title.to_string(),
            description: description.trim().to_string(),
            due,
            priority,
            status: Status::Open,
            tags: split_tags(tags),
            created_at: (self.today)(),
        };
        self.tasks.push(task);
        self.next_id += 1;
        debug!(id, "task created");

        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// The id the next successful `create` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a task by ID, reporting a missing task as an error.
    pub fn find(&self, id: u64) -> Result<&Task, TaskError> {
        self.get(id).ok_or(TaskError::NotFound(id))
    }

    /// Get a mutable reference to a task by ID.
    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.get_mut(idx)
    }

    /// All tasks in creation order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Move a task to a new status. Any status may follow any other.
    pub fn change_status(&mut self, id: u64, new_status: &str) -> Result<StatusChange, TaskError> {
        let task = self.get_mut(id).ok_or(TaskError::NotFound(id))?;
        let to = parse_status(new_status)
            .ok_or_else(|| TaskError::InvalidStatus(new_status.trim().to_string()))?;
        let from = task.status;
        task.status = to;
        debug!(id, %from, %to, "status changed");
        Ok(StatusChange { id, from, to })
    }
}

/// Parse a due date written as `DD-MM-YYYY`. Day and month may have one or two
/// digits, the year exactly four. Impossible calendar dates are rejected.
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if !has_date_shape(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// chrono's `%Y` takes any digit count and a sign, so the shape is checked first.
fn has_date_shape(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    let &[day, month, year] = parts.as_slice() else {
        return false;
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    digits(day)
        && day.len() <= 2
        && digits(month)
        && month.len() <= 2
        && digits(year)
        && year.len() == 4
}

/// Format a date the same way it is entered.
pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Format an optional due date, using `-` when absent.
pub fn format_due(d: Option<NaiveDate>) -> String {
    d.map(format_date).unwrap_or_else(|| "-".into())
}

/// Split a comma-separated tag answer into trimmed segments.
///
/// Empty segments are kept, so `"a,,b"` yields three tags. A blank answer
/// yields no tags at all.
pub fn split_tags(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|part| part.trim().to_string()).collect()
}
