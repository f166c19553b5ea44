//! Task management for Tasktrack.
//!
//! Tasks are units of work with a name, a free-text body, and exactly one
//! status. A task may only be created, or moved, onto a status that exists at
//! that moment; reads resolve the status name and report a missing status as
//! an error rather than skipping the task. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
