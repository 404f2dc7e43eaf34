//! Domain model for graded courses.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every course is identified by its unique `code`.
//! - A record that passed `validate()` is safe to weight in GPA math.

pub mod course;
