//! Persistence collaborators for the gradebook.
//!
//! # Responsibility
//! - Define the load/save contract the service depends on.
//! - Provide JSON-file and SQLite-file implementations.
//!
//! # Invariants
//! - `load` is all-or-nothing: one bad entry fails the whole load.
//! - `save` replaces the full persisted snapshot atomically.

pub mod course_repo;
pub mod json_repo;
pub mod sqlite_repo;
