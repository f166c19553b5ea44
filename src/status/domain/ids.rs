//! Identifier type for statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a status row.
///
/// Identifiers are generated by the store on insert. Zero and negative values
/// never identify a stored status but remain representable so that lookups
/// for them can fail with a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(i32);

impl StatusId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for StatusId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
