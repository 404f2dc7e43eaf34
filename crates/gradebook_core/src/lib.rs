//! Core domain logic for the gradebook.
//! This crate is the single source of truth for course invariants and GPA math.

pub mod db;
pub mod gpa;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use gpa::calculator::{
    all_semester_gpas, round_gpa, semester_gpa, summarize, weighted_gpa, GpaError, GpaResult,
    GpaSummary, SemesterGpa, GPA_DECIMALS,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::course::{
    CourseChanges, CourseField, CourseRecord, CourseValidationError, MAX_SCORE, MIN_SCORE,
};
pub use repo::course_repo::{
    open_repository, CourseRepository, RepoError, RepoResult, StorageBackend,
};
pub use repo::json_repo::JsonFileCourseRepository;
pub use repo::sqlite_repo::SqliteCourseRepository;
pub use service::gradebook_service::{
    GradebookService, ServiceError, ServiceErrorKind, ServiceResult,
};
pub use store::course_store::{CourseStore, StoreError, StoreResult};

