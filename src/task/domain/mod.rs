//! Domain model for task management.
//!
//! The task domain models task content, status references, and the
//! denormalized read view while keeping infrastructure concerns outside of
//! the domain boundary.

mod content;
mod error;
mod ids;
mod task;

pub use content::{TaskName, TaskText};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskView};
