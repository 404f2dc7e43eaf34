//! Course repository contract and backend selection.
//!
//! # Responsibility
//! - Define the snapshot-style `load`/`save` contract.
//! - Map file paths to a concrete backend.
//!
//! # Invariants
//! - A missing data file loads as an empty gradebook.
//! - Corrupt data is reported, never partially recovered.

use crate::db::DbError;
use crate::model::course::CourseRecord;
use crate::repo::json_repo::JsonFileCourseRepository;
use crate::repo::sqlite_repo::SqliteCourseRepository;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error surfaced at the load/save boundary.
#[derive(Debug)]
pub enum RepoError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "gradebook file I/O failed: {err}"),
            Self::Json(err) => write!(f, "gradebook file is not valid: {err}"),
            Self::Db(err) => write!(f, "gradebook database failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted course data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Snapshot persistence for the whole course collection.
pub trait CourseRepository {
    /// Reads every persisted course in stored order.
    fn load(&self) -> RepoResult<Vec<CourseRecord>>;
    /// Replaces the persisted snapshot with `records`.
    fn save(&self, records: &[CourseRecord]) -> RepoResult<()>;
}

impl<R: CourseRepository + ?Sized> CourseRepository for Box<R> {
    fn load(&self) -> RepoResult<Vec<CourseRecord>> {
        (**self).load()
    }

    fn save(&self, records: &[CourseRecord]) -> RepoResult<()> {
        (**self).save(records)
    }
}

/// Storage format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Pick by file extension.
    #[default]
    Auto,
    Json,
    Sqlite,
}

impl StorageBackend {
    /// Resolves `Auto` against `path`: `.db`, `.sqlite` and `.sqlite3` select
    /// SQLite, anything else selects JSON.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let extension = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(str::to_ascii_lowercase);
                match extension.as_deref() {
                    Some("db" | "sqlite" | "sqlite3") => Self::Sqlite,
                    _ => Self::Json,
                }
            }
            explicit => explicit,
        }
    }
}

/// Opens the repository for `path` using `backend`.
///
/// SQLite files are created and migrated on open; JSON files are only
/// touched on the first `save`.
pub fn open_repository(
    path: impl AsRef<Path>,
    backend: StorageBackend,
) -> RepoResult<Box<dyn CourseRepository>> {
    let path = path.as_ref();
    match backend.resolve(path) {
        StorageBackend::Sqlite => Ok(Box::new(SqliteCourseRepository::open(path)?)),
        _ => Ok(Box::new(JsonFileCourseRepository::new(path))),
    }
}
