//! # tasks - Console Task Tracker
//!
//! An interactive, menu-driven task tracker for the terminal. Tasks are kept in
//! memory for the duration of one session; nothing is written to disk.
//!
//! ## Key Features
//!
//! - **Rich Task Fields**: Title, description, due date, priority and tags
//! - **Status Tracking**: open, in-progress, done, paused, cancelled, in any order
//! - **Sorted Listings**: By due date (either direction, undated last) or priority
//! - **Multiple Layouts**: Fixed-width table, per-task cards, or JSON
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a session
//! tasks
//!
//! # List as cards without colours, with debug logs on stderr
//! tasks --layout cards --no-color -vv
//!
//! # Generate completions
//! tasks --completions zsh > _tasks
//! ```
//!
//! ## Vocabulary
//!
//! - Due dates are entered as `DD-MM-YYYY`.
//! - Priorities: `high`, `medium`, `low` (also `hoch`, `mittel`, `niedrig`).
//! - Statuses: `open`, `in-progress`, `done`, `paused`, `cancelled`
//!   (also `offen`, `in bearbeitung`, `erledigt`, `pausiert`, `abgebrochen`).
//!
//! All input is case-insensitive and surrounding whitespace is ignored.

use std::io;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod render;
pub mod sort;
pub mod task;

use cli::Cli;
use cmd::Console;
use db::Database;
use render::RenderOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "tasks", &mut io::stdout());
        return Ok(());
    }

    let opts = RenderOptions {
        layout: cli.layout,
        color: !cli.no_color && std::env::var_os("NO_COLOR").is_none(),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(opts.color),
        )
        .init();
    info!(?opts, "starting session");

    let mut db = Database::new();
    let stdin = io::stdin();
    Console::new(&mut db, stdin.lock(), io::stdout().lock(), opts).run()?;

    info!(tasks = db.len(), "session ended");
    Ok(())
}
