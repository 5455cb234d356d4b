//! Error types for task operations.
//!
//! Every error here is recoverable: the controller reports it on the console
//! and carries on with the next menu iteration.

/// Rejected input while creating a task. Nothing is stored when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title must not be empty.")]
    EmptyTitle,

    #[error("Invalid due date '{0}': expected DD-MM-YYYY.")]
    BadDate(String),

    #[error("Invalid priority '{0}': expected high, medium or low.")]
    BadPriority(String),
}

/// Errors surfaced by the store and the interactive controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task with ID {0} not found.")]
    NotFound(u64),

    #[error("Invalid status '{0}': expected open, in-progress, done, paused or cancelled.")]
    InvalidStatus(String),

    #[error("Invalid selection '{0}'.")]
    InvalidMenuSelection(String),

    #[error("Invalid task ID '{0}'.")]
    InvalidId(String),
}
