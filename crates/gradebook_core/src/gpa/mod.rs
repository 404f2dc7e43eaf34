//! Weighted GPA computation.
//!
//! # Responsibility
//! - Compute credit-weighted averages over course records.
//! - Group records by semester for per-semester views.
//!
//! # Invariants
//! - Functions are pure; inputs are never mutated.
//! - Empty inputs are reported as `GpaError::NoData`, never as `0.0`.
//! - Results are rounded to two decimals, half-up.

pub mod calculator;
