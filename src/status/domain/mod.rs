//! Domain model for the status catalogue.

mod error;
mod ids;
mod name;
mod status;

pub use error::StatusDomainError;
pub use ids::StatusId;
pub use name::StatusName;
pub use status::Status;
