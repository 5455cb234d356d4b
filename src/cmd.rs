//! Interactive menu loop.
//!
//! The controller reads a menu selection, dispatches to the matching command
//! handler, and repeats until the user exits or input runs out. It works over
//! any `BufRead`/`Write` pair so whole sessions can be scripted.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use tracing::debug;

use crate::db::*;
use crate::error::TaskError;
use crate::fields::*;
use crate::render::{render_tasks, RenderOptions, EMPTY_MESSAGE};
use crate::sort::sorted_view;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    ChangeStatus,
    Exit,
}

impl MenuChoice {
    pub fn parse(s: &str) -> Result<MenuChoice, TaskError> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::ChangeStatus),
            "4" => Ok(MenuChoice::Exit),
            other => Err(TaskError::InvalidMenuSelection(other.to_string())),
        }
    }
}

/// Console session bound to one database and one input/output pair.
pub struct Console<'a, R, W> {
    db: &'a mut Database,
    input: R,
    out: W,
    opts: RenderOptions,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(db: &'a mut Database, input: R, out: W, opts: RenderOptions) -> Self {
        Console { db, input, out, opts }
    }

    /// Run the menu loop until the exit entry is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("Choose an option: ")? else {
                break;
            };
            match MenuChoice::parse(&answer) {
                Ok(MenuChoice::Add) => self.cmd_add()?,
                Ok(MenuChoice::List) => self.cmd_list()?,
                Ok(MenuChoice::ChangeStatus) => self.cmd_change_status()?,
                Ok(MenuChoice::Exit) => break,
                Err(e) => {
                    self.report(&e)?;
                    writeln!(self.out, "Please choose 1-4.")?;
                }
            }
        }
        writeln!(self.out, "Goodbye.")?;
        self.out.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        if self.opts.color {
            writeln!(self.out, "{}", "=== Task Tracker ===".bold())?;
        } else {
            writeln!(self.out, "=== Task Tracker ===")?;
        }
        writeln!(self.out, "1. Add task")?;
        writeln!(self.out, "2. List tasks")?;
        writeln!(self.out, "3. Change task status")?;
        writeln!(self.out, "4. Exit")
    }

    /// Show a prompt and read one line. Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt where end of input counts as a blank answer.
    fn prompt_or_blank(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn report(&mut self, e: &TaskError) -> io::Result<()> {
        debug!(error = %e, "request rejected");
        if self.opts.color {
            writeln!(self.out, "{} {e}", "Error:".red().bold())
        } else {
            writeln!(self.out, "Error: {e}")
        }
    }

    /// Ask for every field and add the task if all answers validate.
    fn cmd_add(&mut self) -> io::Result<()> {
        debug!(next_id = self.db.next_id(), "adding task");
        let title = self.prompt_or_blank("Title: ")?;
        let description = self.prompt_or_blank("Description (optional): ")?;
        let due = self.prompt_or_blank("Due date (optional, DD-MM-YYYY): ")?;
        let priority = self.prompt_or_blank("Priority (optional: high, medium, low): ")?;
        let tags = self.prompt_or_blank("Tags (optional, comma-separated): ")?;

        match self.db.create(&title, &description, &due, &priority, &tags) {
            Ok(task) => {
                let (id, created) = (task.id, format_date(task.created_at));
                writeln!(self.out, "Added task #{id} on {created}.")
            }
            Err(e) => self.report(&e.into()),
        }
    }

    /// List all tasks, optionally sorted.
    fn cmd_list(&mut self) -> io::Result<()> {
        if self.db.is_empty() {
            return writeln!(self.out, "{EMPTY_MESSAGE}");
        }

        writeln!(self.out)?;
        writeln!(self.out, "Sort? [Enter = none]")?;
        writeln!(self.out, "1 = due date ascending | 2 = due date descending | 3 = priority")?;
        let answer = self.prompt_or_blank("Choice: ")?;
        let key = match SortKey::from_choice(&answer) {
            Ok(key) => key,
            Err(e) => return self.report(&e),
        };

        let view = sorted_view(self.db.all(), key);
        render_tasks(&mut self.out, &view, &self.opts)
    }

    /// Show the current status of a task and replace it with a new one.
    fn cmd_change_status(&mut self) -> io::Result<()> {
        if self.db.is_empty() {
            return writeln!(self.out, "{EMPTY_MESSAGE}");
        }

        let raw_id = self.prompt_or_blank("ID of the task to update: ")?;
        let id = match raw_id.trim().parse::<u64>() {
            Ok(id) => id,
            Err(_) => return self.report(&TaskError::InvalidId(raw_id.trim().to_string())),
        };
        let current = match self.db.find(id) {
            Ok(task) => task.status,
            Err(e) => return self.report(&e),
        };
        writeln!(self.out, "Current status: {current}")?;

        let vocabulary = Status::ALL.map(Status::as_str).join(", ");
        let answer = self.prompt_or_blank(&format!("New status ({vocabulary}): "))?;
        match self.db.change_status(id, &answer) {
            Ok(change) => writeln!(self.out, "Status updated: {} -> {}.", change.from, change.to),
            Err(e) => self.report(&e),
        }
    }
}
