//! JSON file course repository.
//!
//! # Responsibility
//! - Persist the gradebook as a JSON array of course objects.
//!
//! # Invariants
//! - Writes go to a temp file in the target directory and are renamed over
//!   the target, so readers see the old or the new snapshot, never a mix.
//! - A missing or whitespace-only file loads as an empty gradebook.

use crate::model::course::CourseRecord;
use crate::repo::course_repo::{CourseRepository, RepoResult};
use log::{error, info};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Course repository backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCourseRepository {
    path: PathBuf,
}

impl JsonFileCourseRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_snapshot(&self, records: &[CourseRecord]) -> RepoResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let payload = serde_json::to_vec_pretty(records)?;
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(&payload)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl CourseRepository for JsonFileCourseRepository {
    fn load(&self) -> RepoResult<Vec<CourseRecord>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=gradebook_load module=repo status=ok backend=json courses=0 reason=missing_file"
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=gradebook_load module=repo status=error backend=json error_code=read_failed error={err}"
                );
                return Err(err.into());
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<CourseRecord>>(&raw) {
            Ok(records) => {
                info!(
                    "event=gradebook_load module=repo status=ok backend=json courses={}",
                    records.len()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=gradebook_load module=repo status=error backend=json error_code=decode_failed error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn save(&self, records: &[CourseRecord]) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.write_snapshot(records) {
            Ok(()) => {
                info!(
                    "event=gradebook_save module=repo status=ok backend=json courses={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=gradebook_save module=repo status=error backend=json error_code=write_failed error={err}"
                );
                Err(err)
            }
        }
    }
}
