//! Command definitions
//!
//! Requests a presentation layer hands to the roster, and what comes back.

use crate::model::{RollNo, StudentForm, StudentRecord};

/// A request from a caller
#[derive(Debug, Clone)]
pub enum Command {
    /// Validate the form, generate a roll number and insert
    Add { form: StudentForm },

    /// Validate, then rewrite the record(s) with this roll number
    Update { roll_no: String, form: StudentForm },

    /// Validate the roll number, then remove matching record(s)
    Delete { roll_no: String },

    /// Full-table listing
    List,
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Inserted under this roll number
    Added { roll_no: RollNo },

    /// Number of rows rewritten (0 when nothing matched)
    ///
    /// The roll number is kept as given: an empty one passes validation for
    /// updates and matches nothing, so it is not always a `RollNo`.
    Updated { roll_no: String, rows: usize },

    /// Number of rows removed (0 when nothing matched)
    ///
    /// Deletes always check the format, so this is a parsed `RollNo`.
    Deleted { roll_no: RollNo, rows: usize },

    /// Every record, ordered by id
    Listed(Vec<StudentRecord>),
}
