//! Error types for status domain validation.

use thiserror::Error;

/// Errors returned while constructing status domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatusDomainError {
    /// The status name exceeds the persisted column width.
    #[error("status name is {length} characters long, at most {max} are allowed")]
    NameTooLong {
        /// Character count of the rejected name.
        length: usize,
        /// Maximum accepted character count.
        max: usize,
    },
}
