//! Field rules

use crate::error::ValidationError;
use crate::model::{Gender, RollNo, StudentFields, StudentForm};

/// Validate a form, and optionally the roll number it targets
///
/// An empty `roll_no` is treated the same as `None`. Age is parsed but not
/// range-checked.
pub fn validate(
    form: &StudentForm,
    roll_no: Option<&str>,
) -> Result<StudentFields, ValidationError> {
    if form.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if form.email.is_empty() || !form.email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    let age = parse_age(&form.age)?;

    let gender: Gender = form
        .gender
        .parse()
        .map_err(|_| ValidationError::InvalidGender)?;

    if let Some(raw) = roll_no.filter(|r| !r.is_empty()) {
        validate_roll_no(raw)?;
    }

    Ok(StudentFields {
        name: form.name.clone(),
        email: form.email.clone(),
        age,
        gender,
    })
}

/// Check a caller-supplied roll number on its own
pub fn validate_roll_no(raw: &str) -> Result<RollNo, ValidationError> {
    RollNo::parse(raw)
}

fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NonIntegerAge);
    }
    // Digits only, so the only possible failure is overflow
    raw.parse().map_err(|_| ValidationError::NonIntegerAge)
}
