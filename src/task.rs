//! Task data structure.
//!
//! This module defines the `Task` record tracked by the store. Apart from
//! `status`, every field is written once at creation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::fields::*;

/// A single trackable unit of work.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub due: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Status,
    pub tags: Vec<String>,
    pub created_at: NaiveDate,
}
