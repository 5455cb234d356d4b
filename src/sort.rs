//! Ordered views over the task list.
//!
//! Sorting never touches the store: each view is a fresh `Vec` of references.
//! Undated tasks always come after dated ones, whichever direction is used.

use std::cmp::Ordering;

use crate::fields::*;
use crate::task::Task;

/// Earlier due dates first; undated last; ties by id.
pub fn cmp_due_asc(a: &Task, b: &Task) -> Ordering {
    match (a.due, b.due) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then(a.id.cmp(&b.id))
}

/// Later due dates first; undated still last; ties by id.
pub fn cmp_due_desc(a: &Task, b: &Task) -> Ordering {
    match (a.due, b.due) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then(a.id.cmp(&b.id))
}

/// High before medium before low before unset; ties by id.
pub fn cmp_priority(a: &Task, b: &Task) -> Ordering {
    priority_rank(a.priority)
        .cmp(&priority_rank(b.priority))
        .then(a.id.cmp(&b.id))
}

/// Build a view of `tasks` ordered by `key`, or in store order when `None`.
pub fn sorted_view(tasks: &[Task], key: Option<SortKey>) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    match key {
        Some(SortKey::DueAsc) => view.sort_by(|a, b| cmp_due_asc(a, b)),
        Some(SortKey::DueDesc) => view.sort_by(|a, b| cmp_due_desc(a, b)),
        Some(SortKey::Priority) => view.sort_by(|a, b| cmp_priority(a, b)),
        None => {}
    }
    view
}
