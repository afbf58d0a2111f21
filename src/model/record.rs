//! Student record types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender values accepted by the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All accepted values, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Stored and displayed text
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Exact, case-sensitive match. The error carries the rejected text.
impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(other.to_string()),
        }
    }
}

/// Raw field text as collected from a caller, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
}

impl StudentForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: age.into(),
            gender: gender.into(),
        }
    }
}

/// Validated mutable fields of a record (everything except `id` and `roll_no`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

/// A persisted row of the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Surrogate key assigned by storage on insert
    pub id: i64,
    pub roll_no: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
}

impl StudentRecord {
    /// The mutable fields of this record
    pub fn fields(&self) -> StudentFields {
        StudentFields {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age,
            gender: self.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_round_trips_through_text() {
        for gender in Gender::ALL {
            assert_eq!(gender.as_str().parse::<Gender>(), Ok(gender));
        }
    }

    #[test]
    fn test_gender_is_case_sensitive() {
        assert_eq!("male".parse::<Gender>(), Err("male".to_string()));
        assert!(" Male".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }
}
