//! Roster CRUD over real files

use paydesk_cli::AppError;
use paydesk_cli::store::RosterStore;
use rust_decimal::Decimal;
use shared::models::employee::{EmployeeCreate, EmployeeField};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn employee(id: &str, name: &str, rate: &str) -> EmployeeCreate {
    EmployeeCreate {
        employee_id: id.to_string(),
        name: name.to_string(),
        hourly_rate: dec(rate),
        standard_hours: dec("8"),
        overtime_rate: dec("15"),
    }
}

#[test]
fn full_crud_cycle_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employee_data.csv");

    {
        let mut roster = RosterStore::open(&path).unwrap();
        roster.add(employee("E1", "Alice", "10")).unwrap();
        roster.add(employee("E2", "Bob, Jr.", "11.50")).unwrap();
        roster
            .update_field("E2", EmployeeField::OvertimeRate, "17.25")
            .unwrap();
        roster.remove("E1").unwrap();
    }

    let roster = RosterStore::open(&path).unwrap();
    assert_eq!(roster.list().len(), 1);
    assert!(roster.find("E1").is_none());

    let bob = roster.find("E2").unwrap();
    assert_eq!(bob.name, "Bob, Jr.");
    assert_eq!(bob.hourly_rate, dec("11.50"));
    assert_eq!(bob.overtime_rate, dec("17.25"));
}

#[test]
fn duplicate_id_is_rejected_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employee_data.csv");

    {
        let mut roster = RosterStore::open(&path).unwrap();
        roster.add(employee("001", "Alice", "10")).unwrap();
    }

    let mut roster = RosterStore::open(&path).unwrap();
    let err = roster.add(employee("001", "Clone", "9")).unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    // Textual ID comparison: "1" is a different key than "001"
    roster.add(employee("1", "Other", "9")).unwrap();
    assert_eq!(roster.list().len(), 2);
}

#[test]
fn failed_operations_leave_file_bytes_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employee_data.csv");

    let mut roster = RosterStore::open(&path).unwrap();
    roster.add(employee("E1", "Alice", "10")).unwrap();
    let before = std::fs::read(&path).unwrap();

    assert!(matches!(
        roster.remove("missing"),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        roster.update_field("E1", EmployeeField::HourlyRate, "abc"),
        Err(AppError::InvalidValue { .. })
    ));
    assert!(matches!(
        roster.add(employee("E2", "Bad Rate", "-5")),
        Err(AppError::InvalidValue { .. })
    ));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}
