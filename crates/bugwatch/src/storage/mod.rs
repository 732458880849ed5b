//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `bugwatch_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
