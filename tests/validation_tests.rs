//! Tests for field validation
//!
//! These tests verify:
//! - Valid forms pass and are converted into typed fields
//! - Each rule reports its own error kind
//! - Rules are evaluated in a fixed order
//! - Roll number format checks

use roster::model::{Gender, StudentForm};
use roster::validation::{validate, validate_roll_no};
use roster::ValidationError;

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_form() -> StudentForm {
    StudentForm::new("Asha", "asha@example.com", "20", "Female")
}

// =============================================================================
// Accepting Tests
// =============================================================================

#[test]
fn test_valid_form_passes() {
    let fields = validate(&valid_form(), None).unwrap();

    assert_eq!(fields.name, "Asha");
    assert_eq!(fields.email, "asha@example.com");
    assert_eq!(fields.age, 20);
    assert_eq!(fields.gender, Gender::Female);
}

#[test]
fn test_every_gender_passes() {
    for gender in ["Male", "Female", "Other"] {
        let mut form = valid_form();
        form.gender = gender.to_string();
        assert!(validate(&form, None).is_ok(), "{gender} should pass");
    }
}

#[test]
fn test_minimal_email_passes() {
    let mut form = valid_form();
    form.email = "@".to_string();

    assert!(validate(&form, None).is_ok());
}

#[test]
fn test_age_is_not_range_checked() {
    for age in ["0", "999", "4000000000"] {
        let mut form = valid_form();
        form.age = age.to_string();
        assert!(validate(&form, None).is_ok(), "{age} should pass");
    }
}

#[test]
fn test_valid_form_with_roll_no_passes() {
    assert!(validate(&valid_form(), Some("22CSR007")).is_ok());
}

// =============================================================================
// Single-Rule Failure Tests
// =============================================================================

#[test]
fn test_empty_name() {
    let mut form = valid_form();
    form.name.clear();

    assert_eq!(validate(&form, None), Err(ValidationError::EmptyName));
}

#[test]
fn test_invalid_email() {
    for email in ["", "asha.example.com"] {
        let mut form = valid_form();
        form.email = email.to_string();
        assert_eq!(validate(&form, None), Err(ValidationError::InvalidEmail), "{email:?}");
    }
}

#[test]
fn test_non_integer_age() {
    for age in ["", "twenty", "-3", "20.5", " 20"] {
        let mut form = valid_form();
        form.age = age.to_string();
        assert_eq!(validate(&form, None), Err(ValidationError::NonIntegerAge), "{age:?}");
    }
}

#[test]
fn test_invalid_gender() {
    for gender in ["", "male", "FEMALE", "Unknown"] {
        let mut form = valid_form();
        form.gender = gender.to_string();
        assert_eq!(validate(&form, None), Err(ValidationError::InvalidGender), "{gender:?}");
    }
}

#[test]
fn test_invalid_roll_no() {
    for roll_no in ["22CSE007", "22CSR07", "22CSR0A7"] {
        assert_eq!(
            validate(&valid_form(), Some(roll_no)),
            Err(ValidationError::InvalidRollNoFormat),
            "{roll_no:?}"
        );
    }
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_empty_name_reported_before_invalid_email() {
    let form = StudentForm::new("", "no-at-sign", "20", "Male");

    assert_eq!(validate(&form, None), Err(ValidationError::EmptyName));
}

#[test]
fn test_email_reported_before_age() {
    let form = StudentForm::new("Ravi", "", "x", "Male");

    assert_eq!(validate(&form, None), Err(ValidationError::InvalidEmail));
}

#[test]
fn test_age_reported_before_gender() {
    let form = StudentForm::new("Ravi", "r@x", "x", "nope");

    assert_eq!(validate(&form, None), Err(ValidationError::NonIntegerAge));
}

#[test]
fn test_gender_reported_before_roll_no() {
    let form = StudentForm::new("Ravi", "r@x", "20", "nope");

    assert_eq!(validate(&form, Some("bad")), Err(ValidationError::InvalidGender));
}

#[test]
fn test_all_invalid_reports_first_rule() {
    let form = StudentForm::new("", "", "", "");

    assert_eq!(validate(&form, Some("bad")), Err(ValidationError::EmptyName));
}

// =============================================================================
// Roll Number Tests
// =============================================================================

#[test]
fn test_validate_roll_no_standalone() {
    assert_eq!(validate_roll_no("22CSR007").unwrap().as_str(), "22CSR007");
    assert_eq!(validate_roll_no("22CSE007"), Err(ValidationError::InvalidRollNoFormat));
    assert_eq!(validate_roll_no("22CSR07"), Err(ValidationError::InvalidRollNoFormat));
    assert_eq!(validate_roll_no("22CSR0A7"), Err(ValidationError::InvalidRollNoFormat));
    assert_eq!(validate_roll_no(""), Err(ValidationError::InvalidRollNoFormat));
}

#[test]
fn test_error_messages() {
    assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty");
    assert_eq!(
        ValidationError::InvalidRollNoFormat.to_string(),
        "Roll No must be in the format 22CSRxxx"
    );
}
