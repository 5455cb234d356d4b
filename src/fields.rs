//! Enumerations and field types for tasks.
//!
//! This module defines the closed vocabularies used by the tracker: task
//! status, priority, and the sort modes offered when listing. Each comes with a
//! normalisation function mapping user text onto the enum.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::TaskError;

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Open,
    InProgress,
    Done,
    Paused,
    Cancelled,
}

impl Status {
    /// Every status, in the order they are offered at the prompt.
    pub const ALL: [Status; 5] = [
        Status::Open,
        Status::InProgress,
        Status::Done,
        Status::Paused,
        Status::Cancelled,
    ];

    /// Canonical token shown to the user and accepted back.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in-progress",
            Status::Done => "done",
            Status::Paused => "paused",
            Status::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Available sorting options for task lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueAsc,
    DueDesc,
    Priority,
}

impl SortKey {
    /// Map an answer from the list prompt. Blank means no sorting (`Ok(None)`);
    /// anything other than `1`, `2` or `3` is rejected.
    pub fn from_choice(s: &str) -> Result<Option<SortKey>, TaskError> {
        match s.trim() {
            "" => Ok(None),
            "1" => Ok(Some(SortKey::DueAsc)),
            "2" => Ok(Some(SortKey::DueDesc)),
            "3" => Ok(Some(SortKey::Priority)),
            other => Err(TaskError::InvalidMenuSelection(other.to_string())),
        }
    }
}

/// Output layout for task listings.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Layout {
    /// Fixed-width columns, one row per task.
    #[default]
    Table,
    /// One labelled block per task.
    Cards,
    /// Pretty-printed JSON array.
    Json,
}

/// Parse a status token. Case-insensitive, surrounding whitespace ignored.
///
/// Besides the canonical tokens, the German vocabulary of the tool this one
/// replaces is still understood (`offen`, `in bearbeitung`, `erledigt`,
/// `pausiert`, `abgebrochen`).
pub fn parse_status(s: &str) -> Option<Status> {
    match s.trim().to_lowercase().as_str() {
        "open" | "offen" => Some(Status::Open),
        "in-progress" | "in progress" | "in bearbeitung" => Some(Status::InProgress),
        "done" | "erledigt" => Some(Status::Done),
        "paused" | "pausiert" => Some(Status::Paused),
        "cancelled" | "canceled" | "abgebrochen" => Some(Status::Cancelled),
        _ => None,
    }
}

/// Parse a priority token: `high`/`hoch`, `medium`/`mittel`, `low`/`niedrig`.
pub fn parse_priority(s: &str) -> Option<Priority> {
    match s.trim().to_lowercase().as_str() {
        "high" | "hoch" => Some(Priority::High),
        "medium" | "mittel" => Some(Priority::Medium),
        "low" | "niedrig" => Some(Priority::Low),
        _ => None,
    }
}

/// Sort rank of a priority; smaller sorts first and unset sorts last.
pub fn priority_rank(p: Option<Priority>) -> u8 {
    match p {
        Some(Priority::High) => 0,
        Some(Priority::Medium) => 1,
        Some(Priority::Low) => 2,
        None => 3,
    }
}

/// Format an optional priority for display.
pub fn format_priority(p: Option<Priority>) -> &'static str {
    p.map(Priority::as_str).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_is_case_and_space_insensitive() {
        assert_eq!(parse_status("ERLEDIGT "), Some(Status::Done));
        assert_eq!(parse_status("erledigt"), parse_status("ERLEDIGT "));
        assert_eq!(parse_status("  In-Progress"), Some(Status::InProgress));
        assert_eq!(parse_status("in bearbeitung"), Some(Status::InProgress));
        assert_eq!(parse_status("Cancelled"), Some(Status::Cancelled));
    }

    #[test]
    fn test_parse_status_rejects_unknown() {
        assert_eq!(parse_status("finished"), None);
        assert_eq!(parse_status(""), None);
    }

    #[test]
    fn test_canonical_tokens_round_trip() {
        for s in Status::ALL {
            assert_eq!(parse_status(s.as_str()), Some(s));
        }
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("HOCH"), Some(Priority::High));
        assert_eq!(parse_priority(" medium "), Some(Priority::Medium));
        assert_eq!(parse_priority("niedrig"), Some(Priority::Low));
        assert_eq!(parse_priority("urgent"), None);
    }

    #[test]
    fn test_priority_rank_orders_unset_last() {
        assert!(priority_rank(Some(Priority::High)) < priority_rank(Some(Priority::Medium)));
        assert!(priority_rank(Some(Priority::Medium)) < priority_rank(Some(Priority::Low)));
        assert!(priority_rank(Some(Priority::Low)) < priority_rank(None));
    }

    #[test]
    fn test_sort_key_from_choice() {
        assert_eq!(SortKey::from_choice(""), Ok(None));
        assert_eq!(SortKey::from_choice(" 2 "), Ok(Some(SortKey::DueDesc)));
        assert_eq!(SortKey::from_choice("3"), Ok(Some(SortKey::Priority)));
        assert_eq!(
            SortKey::from_choice("x"),
            Err(TaskError::InvalidMenuSelection("x".into()))
        );
    }
}
