//! SQLite course repository.
//!
//! # Responsibility
//! - Persist the gradebook in a migrated `courses` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `save` replaces all rows inside one transaction.
//! - Row order is carried by the `position` column.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::{open_db, open_db_in_memory};
use crate::model::course::CourseRecord;
use crate::repo::course_repo::{CourseRepository, RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::path::Path;

/// Course repository backed by a SQLite database.
pub struct SqliteCourseRepository {
    conn: Connection,
}

impl SqliteCourseRepository {
    /// Opens (and migrates) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a migrated private in-memory database.
    pub fn in_memory() -> RepoResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Borrows the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn replace_all(&self, records: &[CourseRecord]) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM courses;", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO courses (position, code, name, credits, semester, score)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            )?;
            for (position, record) in records.iter().enumerate() {
                stmt.execute(params![
                    position as i64,
                    record.code.as_str(),
                    record.name.as_str(),
                    i64::from(record.credits),
                    record.semester.as_str(),
                    record.score,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn read_all(&self) -> RepoResult<Vec<CourseRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT code, name, credits, semester, score
             FROM courses
             ORDER BY position ASC, code ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_course_row(row)?);
        }
        Ok(records)
    }
}

impl CourseRepository for SqliteCourseRepository {
    fn load(&self) -> RepoResult<Vec<CourseRecord>> {
        match self.read_all() {
            Ok(records) => {
                info!(
                    "event=gradebook_load module=repo status=ok backend=sqlite courses={}",
                    records.len()
                );
                Ok(records)
            }
            Err(err) => {
                error!(
                    "event=gradebook_load module=repo status=error backend=sqlite error={err}"
                );
                Err(err)
            }
        }
    }

    fn save(&self, records: &[CourseRecord]) -> RepoResult<()> {
        match self.replace_all(records) {
            Ok(()) => {
                info!(
                    "event=gradebook_save module=repo status=ok backend=sqlite courses={}",
                    records.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=gradebook_save module=repo status=error backend=sqlite error={err}"
                );
                Err(err)
            }
        }
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<CourseRecord> {
    let code: String = row.get("code")?;
    let credits_raw: i64 = row.get("credits")?;
    let credits = u32::try_from(credits_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid credits value `{credits_raw}` for course `{code}`"
        ))
    })?;

    let record = CourseRecord {
        name: row.get("name")?,
        credits,
        semester: row.get("semester")?,
        score: row.get("score")?,
        code,
    };
    record.validate().map_err(|err| {
        RepoError::InvalidData(format!("course `{}`: {err}", record.code))
    })?;
    Ok(record)
}
