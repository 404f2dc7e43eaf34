//! In-memory record store.
//!
//! # Responsibility
//! - Hold the authoritative, ordered collection of course records.
//! - Enforce uniqueness and field invariants on every write.
//!
//! # Invariants
//! - Writes are all-or-nothing: a failed call leaves the store unchanged.
//! - Listing order is insertion order.

pub mod course_store;
