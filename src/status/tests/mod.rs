//! Unit tests for the status catalogue.
