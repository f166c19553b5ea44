//! In-memory adapters for the status catalogue.

mod status;

pub use status::InMemoryStatusRepository;
