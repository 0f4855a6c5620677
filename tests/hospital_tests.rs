//! Integration tests for hospital commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_workspace, storekeep_in};

#[test]
fn test_seeded_doctors_are_listed() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);

    storekeep_in(temp.path())
        .args(["hospital", "doctors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 101 | Name: Smith"))
        .stdout(predicate::str::contains("ID: 102 | Name: Jones"))
        .stdout(predicate::str::contains("Specialization: Pediatrics"));
}

#[test]
fn test_add_doctor_gets_next_id() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);

    storekeep_in(temp.path())
        .args([
            "hospital",
            "add-doctor",
            "--name",
            "House",
            "--specialization",
            "Diagnostics",
            "--timings",
            "Mon-Fri 9AM-5PM",
        ])
        .assert()
        .success()
        .stdout("Doctor House (Diagnostics) added with ID: 103\n");

    let data = fs::read_to_string(temp.path().join("hospital_data.json")).unwrap();
    assert!(data.contains("\"next_doctor_id\": 104"));
}

#[test]
fn test_book_appointment_and_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);

    storekeep_in(temp.path())
        .args([
            "hospital",
            "book",
            "--doctor",
            "101",
            "--patient",
            "Alice",
            "--age",
            "30",
            "--condition",
            "Headache",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment Booked Successfully!"))
        .stdout(predicate::str::contains("Appointment ID: 1"))
        .stdout(predicate::str::contains("Doctor: Dr. Smith (Cardiology)"));

    storekeep_in(temp.path())
        .args(["hospital", "appointments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Scheduled"))
        .stdout(predicate::str::contains(
            "Patient: Alice (Age: 30, Condition: Headache)",
        ));
}

#[test]
fn test_book_with_unknown_doctor_fails() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);
    let before = fs::read_to_string(temp.path().join("hospital_data.json")).unwrap();

    storekeep_in(temp.path())
        .args([
            "hospital",
            "book",
            "--doctor",
            "999",
            "--patient",
            "Alice",
            "--age",
            "30",
            "--condition",
            "Headache",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("999"));

    let after = fs::read_to_string(temp.path().join("hospital_data.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_zero_age_is_invalid_input() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), false);

    storekeep_in(temp.path())
        .args([
            "hospital",
            "book",
            "--doctor",
            "101",
            "--patient",
            "Alice",
            "--age",
            "0",
            "--condition",
            "Headache",
        ])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_empty_appointment_list() {
    let temp = TempDir::new().unwrap();
    init_workspace(temp.path(), true);

    storekeep_in(temp.path())
        .args(["hospital", "appointments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments have been booked yet"));
}
