//! Typed errors raised by the task store.
//!
//! Only validation and id allocation errors reach the caller of a mutation:
//! persistence failures after a mutation are logged and swallowed, and
//! hydration failures are recovered by seeding (see [`crate::libs::store::TaskStore`]).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The title was empty or contained only whitespace.
    #[error("Task cannot be empty!")]
    EmptyTitle,

    /// No id is left above the largest one in the collection.
    #[error("No task id available after {0}")]
    IdExhausted(i64),

    /// The persisted blob could not be decoded into a task collection.
    #[error("Malformed task data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The persisted blob decoded but breaks a collection invariant.
    #[error("Invalid task data: {0}")]
    Invalid(String),
}
