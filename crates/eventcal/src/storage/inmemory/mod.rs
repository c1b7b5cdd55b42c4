//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the repository traits
//! that stores all data in HashMaps wrapped in `Arc<RwLock<_>>`. This is useful
//! for testing and for single-session CLI runs where persistence is not
//! required.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventcal::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new().with_member_limit(9);
//! ```

mod repository;

pub use repository::InMemoryRepository;
