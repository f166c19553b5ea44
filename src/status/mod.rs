//! Status catalogue management for Tasktrack.
//!
//! A status is a named category that tasks point at. Statuses are created,
//! renamed, listed, and deleted independently of the tasks that reference
//! them; deleting a status never touches its tasks. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
