//! Adapter implementations of the status repository port.

pub mod memory;
pub mod postgres;
