use clap::Parser;
use clap_complete::Shell;

use crate::fields::Layout;

/// Interactive console task tracker. Tasks live in memory for one session.
#[derive(Parser)]
#[command(name = "tasks", version, about = "Interactive console task tracker")]
pub struct Cli {
    /// Layout used when listing tasks.
    #[arg(long, value_enum, default_value_t = Layout::Table)]
    pub layout: Layout,

    /// Disable coloured output. Setting NO_COLOR has the same effect.
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity on stderr. May be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Log filter implied by the number of `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
