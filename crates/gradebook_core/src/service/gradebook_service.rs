//! Gradebook use-case service.
//!
//! # Responsibility
//! - Own the process-wide course store and its repository.
//! - Expose the add/update/delete/list and GPA entry points used by the CLI.
//!
//! # Invariants
//! - Every successful mutation is saved before it becomes visible.
//! - A failed validation or save leaves memory and storage unchanged.
//! - GPA reads never touch the repository.

use crate::gpa::calculator::{
    all_semester_gpas, semester_gpa, summarize, weighted_gpa, GpaError, GpaSummary, SemesterGpa,
};
use crate::model::course::{CourseChanges, CourseRecord};
use crate::repo::course_repo::{CourseRepository, RepoError};
use crate::store::course_store::{CourseStore, StoreError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error kinds a caller maps to user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Validation,
    DuplicateCode,
    NotFound,
    NoData,
    Persistence,
}

/// Service error for gradebook use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Store rejected a mutation.
    Store(StoreError),
    /// GPA requested over an empty set.
    Gpa(GpaError),
    /// Load or save failed at the storage boundary.
    Persistence(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            Self::Store(StoreError::Validation(_)) => ServiceErrorKind::Validation,
            Self::Store(StoreError::DuplicateCode(_)) => ServiceErrorKind::DuplicateCode,
            Self::Store(StoreError::NotFound(_)) => ServiceErrorKind::NotFound,
            Self::Gpa(GpaError::NoData { .. }) => ServiceErrorKind::NoData,
            Self::Persistence(_) => ServiceErrorKind::Persistence,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Gpa(err) => write!(f, "{err}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Gpa(err) => Some(err),
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<GpaError> for ServiceError {
    fn from(value: GpaError) -> Self {
        Self::Gpa(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Persistence(value)
    }
}

/// Gradebook facade over a course store and a repository implementation.
pub struct GradebookService<R: CourseRepository> {
    repo: R,
    store: CourseStore,
}

impl<R: CourseRepository> GradebookService<R> {
    /// Loads the persisted gradebook through `repo`.
    ///
    /// # Errors
    /// - `Persistence` when the data cannot be read, or when a persisted
    ///   record is invalid or duplicated. Nothing is partially loaded.
    pub fn open(repo: R) -> ServiceResult<Self> {
        let records = repo.load()?;
        let store = CourseStore::from_records(records).map_err(|err| {
            ServiceError::Persistence(RepoError::InvalidData(err.to_string()))
        })?;
        debug!(
            "event=gradebook_open module=service status=ok courses={}",
            store.len()
        );
        Ok(Self { repo, store })
    }

    /// Adds a course and saves the gradebook.
    pub fn add(&mut self, record: CourseRecord) -> ServiceResult<CourseRecord> {
        let mut next = self.store.clone();
        let added = next.add(record)?.clone();
        self.commit(next, "add")?;
        Ok(added)
    }

    /// Applies partial changes to the course under `code` and saves.
    pub fn update(&mut self, code: &str, changes: &CourseChanges) -> ServiceResult<CourseRecord> {
        let mut next = self.store.clone();
        let updated = next.update(code, changes)?.clone();
        self.commit(next, "update")?;
        Ok(updated)
    }

    /// Deletes the course under `code` and saves.
    pub fn delete(&mut self, code: &str) -> ServiceResult<CourseRecord> {
        let mut next = self.store.clone();
        let removed = next.delete(code)?;
        self.commit(next, "delete")?;
        Ok(removed)
    }

    /// Gets one course by code.
    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.store.get(code)
    }

    /// Lists all courses in insertion order.
    pub fn list(&self) -> &[CourseRecord] {
        self.store.list()
    }

    /// Weighted GPA over every course.
    pub fn compute_overall_gpa(&self) -> ServiceResult<f64> {
        Ok(weighted_gpa(self.store.list())?)
    }

    /// Overall GPA with credit and course totals.
    pub fn summary(&self) -> ServiceResult<GpaSummary> {
        Ok(summarize(self.store.list())?)
    }

    /// Weighted GPA of one semester (case-sensitive label match).
    pub fn compute_semester_gpa(&self, semester: &str) -> ServiceResult<f64> {
        Ok(semester_gpa(self.store.list(), semester)?)
    }

    /// GPA of every semester in order of first appearance.
    pub fn compute_all_semester_gpas(&self) -> Vec<SemesterGpa> {
        all_semester_gpas(self.store.list())
    }

    /// Borrows the repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn commit(&mut self, next: CourseStore, operation: &str) -> ServiceResult<()> {
        if let Err(err) = self.repo.save(next.list()) {
            warn!(
                "event=gradebook_commit module=service status=error op={operation} error={err}"
            );
            return Err(err.into());
        }
        debug!(
            "event=gradebook_commit module=service status=ok op={operation} courses={}",
            next.len()
        );
        self.store = next;
        Ok(())
    }
}
