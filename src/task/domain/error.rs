//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name exceeds the persisted column width.
    #[error("task name is {length} characters long, at most {max} are allowed")]
    NameTooLong {
        /// Character count of the rejected name.
        length: usize,
        /// Maximum accepted character count.
        max: usize,
    },

    /// The task text exceeds the persisted column width.
    #[error("task text is {length} characters long, at most {max} are allowed")]
    TextTooLong {
        /// Character count of the rejected text.
        length: usize,
        /// Maximum accepted character count.
        max: usize,
    },

    /// A task identifier could not be parsed as a UUID.
    #[error("malformed task identifier '{0}', expected a UUID")]
    MalformedTaskId(String),
}
