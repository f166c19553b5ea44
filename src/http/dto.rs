//! Request and response shapes for the HTTP surface.

use serde::{Deserialize, Deserializer, Serialize};

use crate::status::domain::{Status, StatusId};
use crate::task::domain::TaskView;

/// Query string carrying a new status name.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusNameQuery {
    /// Name for the new status.
    pub status_name: String,
}

/// Query string carrying a status identifier.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StatusIdQuery {
    /// Status identifier.
    pub status_id: i32,
}

/// Query string carrying a task identifier as text.
///
/// The value stays textual so that a malformed UUID is reported as a
/// client error by the handler rather than as a query rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskIdQuery {
    /// Task identifier, hyphenated or simple UUID form.
    pub task_id: String,
}

/// Body of `PATCH /status/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusBody {
    /// Status to modify.
    #[serde(deserialize_with = "lenient_i32")]
    pub id: i32,
    /// Replacement name; absent or empty keeps the stored name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `PUT /tasks/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task name.
    pub name: String,
    /// Task body.
    pub text: String,
    /// Identifier of an existing status.
    #[serde(deserialize_with = "lenient_i32")]
    pub status: i32,
}

/// Body of `PATCH /tasks/update`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskBody {
    /// Task to modify.
    pub id: String,
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement text.
    #[serde(default)]
    pub text: Option<String>,
    /// Replacement status; `0` keeps the stored status.
    #[serde(default, deserialize_with = "lenient_optional_i32")]
    pub status: Option<i32>,
}

/// Status as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Status identifier.
    pub id: i32,
    /// Status name.
    pub name: String,
}

impl From<Status> for StatusResponse {
    fn from(status: Status) -> Self {
        Self {
            id: status.id().value(),
            name: status.name().as_str().to_owned(),
        }
    }
}

/// Task as returned to clients, with the status name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// 32 lowercase hex digits without dashes.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Task body.
    pub text: String,
    /// Name of the task's status.
    pub status: String,
}

impl From<TaskView> for TaskResponse {
    fn from(view: TaskView) -> Self {
        Self {
            id: view.id.to_simple_string(),
            name: view.name,
            text: view.text,
            status: view.status,
        }
    }
}

impl UpdateTaskBody {
    pub(super) fn status_id(&self) -> Option<StatusId> {
        self.status.map(StatusId::new)
    }
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "an integer or a numeric string")]
enum NumberOrText {
    Number(i64),
    Float(f64),
    Text(String),
}

impl NumberOrText {
    fn into_i32<E: serde::de::Error>(self) -> Result<i32, E> {
        match self {
            Self::Number(number) => i32::try_from(number)
                .map_err(|_| E::custom(format!("integer {number} is out of range"))),
            // Integral floats display without a fractional part, e.g. `3.0` as `3`.
            Self::Float(number) => number
                .to_string()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("{number} is not a valid integer"))),
            Self::Text(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| E::custom(format!("'{text}' is not a valid integer"))),
        }
    }
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_i32()
}

fn lenient_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrText>::deserialize(deserializer)?
        .map(NumberOrText::into_i32::<D::Error>)
        .transpose()
}
