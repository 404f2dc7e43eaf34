//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, calculator and repository calls into use-case APIs.
//! - Keep the CLI decoupled from storage details.

pub mod gradebook_service;
