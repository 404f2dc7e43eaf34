//! Course store keyed by course code.
//!
//! # Responsibility
//! - Provide create/update/delete/list over course records.
//! - Report semantic errors (`DuplicateCode`, `NotFound`, `Validation`).
//!
//! # Invariants
//! - `code` is unique across the store at all times.
//! - Every stored record satisfies `CourseRecord::validate()`.
//! - Updates replace a record in place, keeping its list position.

use crate::model::course::{CourseChanges, CourseRecord, CourseValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// A field of the candidate (or merged) record is invalid.
    Validation(CourseValidationError),
    /// Another record already uses this code.
    DuplicateCode(String),
    /// No record has this code.
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateCode(code) => write!(f, "course with code '{code}' already exists"),
            Self::NotFound(code) => write!(f, "course with code '{code}' does not exist"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateCode(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<CourseValidationError> for StoreError {
    fn from(value: CourseValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered mapping from course code to course record.
///
/// Gradebooks hold tens of courses, so a vector with linear lookup keeps
/// insertion order without a second index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseStore {
    records: Vec<CourseRecord>,
}

impl CourseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted records, in order.
    ///
    /// The first invalid or duplicate record fails the whole build.
    pub fn from_records(records: impl IntoIterator<Item = CourseRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.add(record)?;
        }
        Ok(store)
    }

    /// Inserts a new record after validating it.
    ///
    /// # Errors
    /// - `Validation` when any field violates its invariant.
    /// - `DuplicateCode` when `record.code` is already stored.
    pub fn add(&mut self, record: CourseRecord) -> StoreResult<&CourseRecord> {
        record.validate()?;
        if self.position(&record.code).is_some() {
            return Err(StoreError::DuplicateCode(record.code));
        }

        self.records.push(record);
        let index = self.records.len() - 1;
        Ok(&self.records[index])
    }

    /// Applies `changes` to the record stored under `code`.
    ///
    /// The merged record is fully re-validated before it replaces the old
    /// one. Renaming the code is allowed as long as the new code is free.
    ///
    /// # Errors
    /// - `NotFound` when `code` is absent.
    /// - `Validation` when the merged record is invalid.
    /// - `DuplicateCode` when the new code belongs to another record.
    pub fn update(&mut self, code: &str, changes: &CourseChanges) -> StoreResult<&CourseRecord> {
        let index = self
            .position(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;

        let merged = changes.apply_to(&self.records[index]);
        merged.validate()?;
        if let Some(other) = self.position(&merged.code) {
            if other != index {
                return Err(StoreError::DuplicateCode(merged.code));
            }
        }

        self.records[index] = merged;
        Ok(&self.records[index])
    }

    /// Removes and returns the record stored under `code`.
    pub fn delete(&mut self, code: &str) -> StoreResult<CourseRecord> {
        let index = self
            .position(code)
            .ok_or_else(|| StoreError::NotFound(code.to_string()))?;
        Ok(self.records.remove(index))
    }

    /// Looks up one record by exact code.
    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Returns all records in insertion order.
    pub fn list(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.records.iter().position(|record| record.code == code)
    }
}
