//! Tasktrack: a task and status tracking HTTP service.
//!
//! This crate stores *statuses* (named categories) and *tasks* (units of work
//! that reference exactly one status) in a relational store and exposes them
//! through a small JSON-over-HTTP API.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//! - **Services**: Operations combining lookups, mutations, and typed failures
//!
//! # Modules
//!
//! - [`status`]: Status catalogue management
//! - [`task`]: Task management with denormalized status reads
//! - [`http`]: axum transport translating service failures into HTTP codes
//! - [`config`]: Process configuration chosen once at startup
//! - [`storage`]: Connection pooling, migrations, and adapter selection

pub mod config;
pub mod http;
pub mod status;
pub mod storage;
pub mod task;
