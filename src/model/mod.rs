//! Model Module
//!
//! The student record and the values that make it up.
//!
//! ## Types
//! - `StudentForm`: raw text exactly as a caller collected it
//! - `StudentFields`: the mutable fields after validation
//! - `StudentRecord`: a persisted row, including its surrogate `id`
//! - `RollNo`: the external identifier, `22CSR` + 3 digits
//! - `Gender`: closed set {Male, Female, Other}

mod record;
mod roll_no;

pub use record::{Gender, StudentFields, StudentForm, StudentRecord};
pub use roll_no::{RollNo, ROLL_NO_LEN, ROLL_NO_MAX_SEQUENCE, ROLL_NO_PREFIX};
