//! Application services for the status catalogue.

mod catalog;

pub use catalog::{StatusService, StatusServiceError, StatusServiceResult, UpdateStatusRequest};
