//! Gradebook schema versioning.
//!
//! # Responsibility
//! - Create the `courses` schema on first open.
//! - Refuse databases written by a newer gradebook build.
//!
//! # Invariants
//! - The applied schema version is mirrored to `PRAGMA user_version`.
//! - Schema creation and the version bump commit together.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// Schema version written by this build.
const SCHEMA_VERSION: u32 = 1;
const COURSES_SCHEMA_SQL: &str = include_str!("0001_courses.sql");

/// Returns the schema version this build reads and writes.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Brings `conn` up to [`latest_version`], creating the schema when missing.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is newer than this build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    match db_version {
        SCHEMA_VERSION => Ok(()),
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(COURSES_SCHEMA_SQL)?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            tx.commit()?;
            Ok(())
        }
        newer => Err(DbError::UnsupportedSchemaVersion {
            db_version: newer,
            latest_supported: SCHEMA_VERSION,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, latest_version};
    use rusqlite::Connection;

    #[test]
    fn blank_connection_gets_courses_schema_once() {
        let mut conn = Connection::open_in_memory().unwrap();

        apply_migrations(&mut conn).unwrap();
        apply_migrations(&mut conn).unwrap();

        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, latest_version());
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM courses;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 0);
    }
}
