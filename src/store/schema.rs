//! SQL statements for the `students` table and the sequence table

pub(super) const CREATE_STUDENTS: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        roll_no TEXT NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        age INTEGER NOT NULL,
        gender TEXT NOT NULL
    )";

/// Single-row high-water mark for issued roll number sequences
pub(super) const CREATE_ROLL_SEQUENCE: &str = "
    CREATE TABLE IF NOT EXISTS roll_sequence (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        last_value INTEGER NOT NULL
    )";

/// Raises the high-water mark to the largest sequence present in `students`.
/// Runs on every schema check, so rows inserted without tracking are
/// accounted for. Only well-formed roll numbers (22CSR + 3 digits) count.
pub(super) const SYNC_ROLL_SEQUENCE: &str = "
    INSERT INTO roll_sequence (id, last_value)
    SELECT 1, COALESCE(MAX(CAST(substr(roll_no, 6) AS INTEGER)), 0)
    FROM students
    WHERE length(roll_no) = 8
      AND substr(roll_no, 1, 5) = '22CSR'
      AND substr(roll_no, 6) GLOB '[0-9][0-9][0-9]'
    ON CONFLICT(id) DO UPDATE SET last_value = MAX(last_value, excluded.last_value)";

pub(super) const INSERT_STUDENT: &str =
    "INSERT INTO students (roll_no, name, email, age, gender) VALUES (?1, ?2, ?3, ?4, ?5)";

pub(super) const RAISE_ROLL_SEQUENCE: &str =
    "UPDATE roll_sequence SET last_value = MAX(last_value, ?1) WHERE id = 1";

pub(super) const SELECT_ROLL_SEQUENCE: &str =
    "SELECT last_value FROM roll_sequence WHERE id = 1";

pub(super) const SELECT_ALL: &str =
    "SELECT id, roll_no, name, email, age, gender FROM students ORDER BY id";

pub(super) const SELECT_BY_ROLL_NO: &str =
    "SELECT id, roll_no, name, email, age, gender FROM students WHERE roll_no = ?1 ORDER BY id";

pub(super) const COUNT: &str = "SELECT COUNT(*) FROM students";

pub(super) const UPDATE_BY_ROLL_NO: &str =
    "UPDATE students SET name = ?1, email = ?2, age = ?3, gender = ?4 WHERE roll_no = ?5";

pub(super) const DELETE_BY_ROLL_NO: &str = "DELETE FROM students WHERE roll_no = ?1";
