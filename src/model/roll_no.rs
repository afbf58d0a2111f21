//! Roll number
//!
//! ## Format
//! ```text
//! ┌────┬─────┬─────┐
//! │ 22 │ CSR │ 007 │
//! └────┴─────┴─────┘
//!  year dept  sequence (zero-padded, 3 digits)
//! ```
//! Exactly 8 bytes. The same check applies to generated roll numbers and to
//! roll numbers supplied by callers for update/delete.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fixed prefix: year "22" + department "CSR"
pub const ROLL_NO_PREFIX: &str = "22CSR";

/// Total length of a roll number
pub const ROLL_NO_LEN: usize = 8;

/// Largest sequence expressible in 3 digits
pub const ROLL_NO_MAX_SEQUENCE: u64 = 999;

/// A well-formed roll number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RollNo(String);

impl RollNo {
    /// Format a sequence number, e.g. 7 → "22CSR007"
    ///
    /// Returns `None` for 0 or for sequences that do not fit in 3 digits.
    pub fn from_sequence(sequence: u64) -> Option<Self> {
        if sequence == 0 || sequence > ROLL_NO_MAX_SEQUENCE {
            return None;
        }
        Some(RollNo(format!("{}{:03}", ROLL_NO_PREFIX, sequence)))
    }

    /// Check the format of caller-supplied text
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if Self::is_well_formed(raw) {
            Ok(RollNo(raw.to_string()))
        } else {
            Err(ValidationError::InvalidRollNoFormat)
        }
    }

    /// Prefix, length and trailing-digit check
    pub fn is_well_formed(raw: &str) -> bool {
        raw.len() == ROLL_NO_LEN
            && raw.starts_with(ROLL_NO_PREFIX)
            && raw.as_bytes()[ROLL_NO_PREFIX.len()..]
                .iter()
                .all(u8::is_ascii_digit)
    }

    /// The numeric suffix ("22CSR007" → 7)
    pub fn sequence(&self) -> u64 {
        // Three ASCII digits, checked on construction
        self.0[ROLL_NO_PREFIX.len()..]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RollNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for RollNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RollNo {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_well_formed(&value) {
            Ok(RollNo(value))
        } else {
            Err(ValidationError::InvalidRollNoFormat)
        }
    }
}

impl From<RollNo> for String {
    fn from(roll_no: RollNo) -> Self {
        roll_no.0
    }
}
