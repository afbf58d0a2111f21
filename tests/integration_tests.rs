//! Integration tests for the roster

use roster::config::{Config, RollNoStrategy};
use roster::model::StudentForm;
use roster::{Gender, Roster, StudentRecord};
use tempfile::TempDir;

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_full_record_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .db_path(temp_dir.path().join("students.db"))
        .build();
    let roster = Roster::open(config).unwrap();

    let asha = roster
        .add_student(&StudentForm::new("Asha", "asha@example.com", "19", "Female"))
        .unwrap();
    let ravi = roster
        .add_student(&StudentForm::new("Ravi", "ravi@example.com", "20", "Male"))
        .unwrap();
    assert_eq!(asha.as_str(), "22CSR001");
    assert_eq!(ravi.as_str(), "22CSR002");

    roster
        .update_student(
            ravi.as_str(),
            &StudentForm::new("Ravi S", "ravi.s@example.com", "21", "Male"),
        )
        .unwrap();
    roster.delete_student(asha.as_str()).unwrap();

    let records = roster.list_students().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].roll_no, "22CSR002");
    assert_eq!(records[0].name, "Ravi S");
    assert_eq!(records[0].email, "ravi.s@example.com");
    assert_eq!(records[0].age, 21);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .db_path(temp_dir.path().join("students.db"))
        .roll_no_strategy(RollNoStrategy::Counter)
        .build();

    {
        let roster = Roster::open(config.clone()).unwrap();
        roster
            .add_student(&StudentForm::new("A", "a@x", "18", "Other"))
            .unwrap();
        roster
            .add_student(&StudentForm::new("B", "b@x", "18", "Other"))
            .unwrap();
        roster.delete_student("22CSR002").unwrap();
    }

    let roster = Roster::open(config).unwrap();
    assert_eq!(roster.list_students().unwrap().len(), 1);
    assert_eq!(roster.generate_roll_no().unwrap().as_str(), "22CSR003");
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_record_json_shape() {
    let record = StudentRecord {
        id: 1,
        roll_no: "22CSR001".to_string(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        age: 19,
        gender: Gender::Female,
    };

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["roll_no"], "22CSR001");
    assert_eq!(json["age"], 19);
    assert_eq!(json["gender"], "Female");
}

#[test]
fn test_config_from_json() {
    let config: Config =
        serde_json::from_str(r#"{ "db_path": "roster.db", "roll_no_strategy": "counter" }"#)
            .unwrap();

    assert_eq!(config.db_path.to_str(), Some("roster.db"));
    assert_eq!(config.roll_no_strategy, RollNoStrategy::Counter);
    assert_eq!(config.busy_timeout_ms, 5000);
}
