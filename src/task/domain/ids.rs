//! Identifier type for tasks.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a task identifier from UUID text.
    ///
    /// Accepts 32 hex digits with dashes anywhere, optionally wrapped in
    /// braces or prefixed with `urn:uuid:`. Surrounding whitespace is not
    /// stripped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MalformedTaskId`] when the text is not a
    /// UUID.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let malformed = || TaskDomainError::MalformedTaskId(value.to_owned());
        let unprefixed = value.replace("urn:", "").replace("uuid:", "");
        let digits: String = unprefixed
            .trim_matches(['{', '}'])
            .chars()
            .filter(|ch| *ch != '-')
            .collect();
        if digits.len() != 32 {
            return Err(malformed());
        }
        Uuid::try_parse(&digits).map(Self).map_err(|_| malformed())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns the identifier as 32 lowercase hex digits without dashes.
    #[must_use]
    pub fn to_simple_string(self) -> String {
        self.0.simple().to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for TaskId {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
