//! Validation Module
//!
//! Gatekeeping for field input before any write reaches the store.
//!
//! ## Check Order
//! Checks run in a fixed order and stop at the first failure, so a form with
//! several problems always reports the same one:
//! 1. name non-empty              → `EmptyName`
//! 2. email non-empty, has `@`    → `InvalidEmail`
//! 3. age is ASCII digits only    → `NonIntegerAge`
//! 4. gender ∈ {Male,Female,Other} → `InvalidGender`
//! 5. roll number, if supplied    → `InvalidRollNoFormat`

mod rules;

pub use rules::{validate, validate_roll_no};
