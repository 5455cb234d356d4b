//! Rendering of task lists for the console.
//!
//! Three layouts are supported: a fixed-width table, one labelled card per
//! task, and JSON. Column widths are measured in characters so multi-byte
//! text never splits mid-character.

use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::db::{format_date, format_due};
use crate::fields::*;
use crate::task::Task;

/// Message printed instead of a listing when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No tasks yet.";

/// Table columns and their fixed widths.
const COLUMNS: [(&str, usize); 8] = [
    ("ID", 5),
    ("Title", 20),
    ("Description", 30),
    ("Due", 12),
    ("Priority", 10),
    ("Status", 15),
    ("Tags", 25),
    ("Created", 12),
];

/// How listings are drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub layout: Layout,
    pub color: bool,
}

/// Render `tasks` with the configured layout, or the empty-state message when
/// there are none.
pub fn render_tasks<W: Write>(out: &mut W, tasks: &[&Task], opts: &RenderOptions) -> io::Result<()> {
    if tasks.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }
    match opts.layout {
        Layout::Table => render_table(out, tasks, opts.color),
        Layout::Cards => render_cards(out, tasks, opts.color),
        Layout::Json => {
            serde_json::to_writer_pretty(&mut *out, tasks)?;
            writeln!(out)
        }
    }
}

fn render_table<W: Write>(out: &mut W, tasks: &[&Task], color: bool) -> io::Result<()> {
    let header: String = COLUMNS.iter().map(|(name, width)| cell(name, *width)).collect();
    let rule = "-".repeat(header.chars().count());
    writeln!(out)?;
    if color {
        writeln!(out, "{}", header.trim_end().bold())?;
    } else {
        writeln!(out, "{}", header.trim_end())?;
    }
    writeln!(out, "{rule}")?;

    for t in tasks {
        let values = row_values(t);
        let mut line = String::new();
        for (i, (value, (_, width))) in values.iter().zip(COLUMNS.iter()).enumerate() {
            let padded = cell(value, *width);
            if color && i == 5 {
                line.push_str(&paint_status(t.status, &padded).to_string());
            } else {
                line.push_str(&padded);
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

fn render_cards<W: Write>(out: &mut W, tasks: &[&Task], color: bool) -> io::Result<()> {
    for (i, t) in tasks.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let heading = format!("#{} {}", t.id, t.title);
        if color {
            writeln!(out, "{}", heading.as_str().bold().cyan())?;
        } else {
            writeln!(out, "{heading}")?;
        }
        let status = if color {
            paint_status(t.status, t.status.as_str()).to_string()
        } else {
            t.status.to_string()
        };
        writeln!(out, "  Description: {}", dash_if_empty(&t.description))?;
        writeln!(out, "  Due:         {}", format_due(t.due))?;
        writeln!(out, "  Priority:    {}", format_priority(t.priority))?;
        writeln!(out, "  Status:      {status}")?;
        writeln!(out, "  Tags:        {}", format_tags(&t.tags))?;
        writeln!(out, "  Created:     {}", format_date(t.created_at))?;
    }
    Ok(())
}

fn row_values(t: &Task) -> [String; 8] {
    [
        t.id.to_string(),
        t.title.clone(),
        dash_if_empty(&t.description).to_string(),
        format_due(t.due),
        format_priority(t.priority).to_string(),
        t.status.to_string(),
        format_tags(&t.tags),
        format_date(t.created_at),
    ]
}

fn paint_status(status: Status, text: &str) -> StyledContent<&str> {
    match status {
        Status::Open => text.cyan(),
        Status::InProgress => text.yellow(),
        Status::Done => text.green(),
        Status::Paused => text.magenta(),
        Status::Cancelled => text.dark_grey(),
    }
}

fn dash_if_empty(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".into()
    } else {
        tags.join(", ")
    }
}

/// Fit `text` into a column of `width` characters, keeping the last one free
/// as a separator.
fn cell(text: &str, width: usize) -> String {
    let fitted = truncate(text, width.saturating_sub(1));
    format!("{fitted:<width$}")
}

/// Truncate a string to a maximum number of characters, adding an ellipsis if
/// it was cut.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(width - 1).collect();
    out.push('…');
    out
}
