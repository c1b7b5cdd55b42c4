//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `eventcal_core::storage`. Only the in-memory backend ships
//! today; handlers depend on the traits, never on the backend.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
