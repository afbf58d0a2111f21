//! Record Store
//!
//! SQLite-backed `students` table.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};

use crate::config::{Config, RollNoStrategy};
use crate::error::StorageError;
use crate::model::{Gender, RollNo, StudentFields, StudentRecord};

use super::schema;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StorageError>;

/// Handle to the student table
///
/// Holds only the location and connection settings; no connection outlives
/// a single method call.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Database file
    path: PathBuf,

    /// Busy timeout applied to every connection
    busy_timeout: Duration,

    /// Maintain the `roll_sequence` high-water mark on insert
    track_sequence: bool,
}

/// Columns as read, before mapping into a `StudentRecord`
struct RawRow {
    id: i64,
    roll_no: String,
    name: String,
    email: String,
    age: i64,
    gender: String,
}

impl RecordStore {
    /// Create a store handle from config (no I/O)
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.db_path.clone(),
            busy_timeout: Duration::from_millis(config.busy_timeout_ms),
            track_sequence: config.roll_no_strategy == RollNoStrategy::Counter,
        }
    }

    /// Create a store handle with default settings for a path (convenience)
    pub fn open_path(path: &Path) -> Self {
        let config = Config::builder().db_path(path).build();
        Self::new(&config)
    }

    /// Create the table if absent
    ///
    /// Safe to call any number of times; existing rows are untouched. Also
    /// creates the parent directory of the database file. When tracking
    /// sequences, raises the high-water mark to cover every existing row.
    pub fn ensure_schema(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(schema::CREATE_STUDENTS)?;

        if self.track_sequence {
            conn.execute_batch(schema::CREATE_ROLL_SEQUENCE)?;
            conn.execute_batch(schema::SYNC_ROLL_SEQUENCE)?;
        }

        tracing::debug!(path = %self.path.display(), "schema ensured");
        Ok(())
    }

    /// Append a row, returning its surrogate id
    ///
    /// The roll number is stored as given; uniqueness is not enforced here.
    pub fn insert(&self, roll_no: &str, fields: &StudentFields) -> StoreResult<i64> {
        let mut conn = self.connect()?;

        let tx = conn.transaction()?;
        tx.execute(
            schema::INSERT_STUDENT,
            params![
                roll_no,
                fields.name,
                fields.email,
                fields.age,
                fields.gender.as_str()
            ],
        )?;
        let id = tx.last_insert_rowid();

        if self.track_sequence {
            if let Ok(parsed) = RollNo::parse(roll_no) {
                tx.execute(schema::RAISE_ROLL_SEQUENCE, params![parsed.sequence() as i64])?;
            }
        }
        tx.commit()?;

        tracing::info!(id, roll_no, "student inserted");
        Ok(id)
    }

    /// Every row, ordered by surrogate id
    pub fn list_all(&self) -> StoreResult<Vec<StudentRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(schema::SELECT_ALL)?;
        let rows = stmt
            .query_map([], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = rows.len(), "listed students");
        rows.into_iter().map(into_record).collect()
    }

    /// All rows carrying `roll_no`, ordered by surrogate id
    ///
    /// Usually zero or one, but more than one is possible when a roll
    /// number has been reissued.
    pub fn find_by_roll_no(&self, roll_no: &str) -> StoreResult<Vec<StudentRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(schema::SELECT_BY_ROLL_NO)?;
        let rows = stmt
            .query_map(params![roll_no], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(into_record).collect()
    }

    /// Number of rows (same as `list_all().len()`)
    pub fn count(&self) -> StoreResult<u64> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row(schema::COUNT, [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Highest roll number sequence ever inserted
    ///
    /// Always 0 unless the store tracks sequences and `ensure_schema` has run.
    pub fn last_sequence(&self) -> StoreResult<u64> {
        if !self.track_sequence {
            return Ok(0);
        }

        let conn = self.connect()?;
        let value: Option<i64> = conn
            .query_row(schema::SELECT_ROLL_SEQUENCE, [], |row| row.get(0))
            .optional()?;
        Ok(value.unwrap_or(0).max(0) as u64)
    }

    /// Rewrite the mutable fields of every row matching `roll_no`
    ///
    /// Returns the number of rows changed. No match is not an error.
    pub fn update(&self, roll_no: &str, fields: &StudentFields) -> StoreResult<usize> {
        let conn = self.connect()?;
        let changed = conn.execute(
            schema::UPDATE_BY_ROLL_NO,
            params![
                fields.name,
                fields.email,
                fields.age,
                fields.gender.as_str(),
                roll_no
            ],
        )?;

        if changed == 0 {
            tracing::warn!(roll_no, "update matched no rows");
        } else {
            tracing::info!(roll_no, changed, "student updated");
        }
        Ok(changed)
    }

    /// Remove every row matching `roll_no`
    ///
    /// Returns the number of rows removed. No match is not an error.
    pub fn delete(&self, roll_no: &str) -> StoreResult<usize> {
        let conn = self.connect()?;
        let removed = conn.execute(schema::DELETE_BY_ROLL_NO, params![roll_no])?;

        if removed == 0 {
            tracing::warn!(roll_no, "delete matched no rows");
        } else {
            tracing::info!(roll_no, removed, "student deleted");
        }
        Ok(removed)
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Open a fresh connection; dropped by the caller on every exit path
    fn connect(&self) -> StoreResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.path, flags).map_err(|source| {
            StorageError::Open {
                path: self.path.clone(),
                source,
            }
        })?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        roll_no: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        age: row.get(4)?,
        gender: row.get(5)?,
    })
}

fn into_record(raw: RawRow) -> StoreResult<StudentRecord> {
    let age = u32::try_from(raw.age).map_err(|_| {
        StorageError::CorruptRow(format!("id {}: age {} out of range", raw.id, raw.age))
    })?;
    let gender: Gender = raw.gender.parse().map_err(|bad: String| {
        StorageError::CorruptRow(format!("id {}: unknown gender {:?}", raw.id, bad))
    })?;

    Ok(StudentRecord {
        id: raw.id,
        roll_no: raw.roll_no,
        name: raw.name,
        email: raw.email,
        age,
        gender,
    })
}
