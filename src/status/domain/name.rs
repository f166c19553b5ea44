//! Validated status name type.

use super::StatusDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a status name, matching the `VARCHAR(2048)` column.
const MAX_NAME_LENGTH: usize = 2048;

/// Human-readable status label such as `In Progress`.
///
/// Names are stored verbatim. Empty names are accepted and duplicates are
/// permitted; only the length is bounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::NameTooLong`] when the value exceeds 2048
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(StatusDomainError::NameTooLong {
                length,
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
