//! End-to-end payslip generation against real files

use chrono::NaiveDateTime;
use paydesk_cli::config::StatutoryRates;
use paydesk_cli::payroll::workflow::generate_payslip;
use paydesk_cli::store::{LedgerStore, RosterStore};
use paydesk_cli::utils::time::TIMESTAMP_FORMAT;
use rust_decimal::Decimal;
use shared::models::employee::EmployeeCreate;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seeded_roster(path: &std::path::Path) -> RosterStore {
    let mut roster = RosterStore::open(path).unwrap();
    roster
        .add(EmployeeCreate {
            employee_id: "E1".to_string(),
            name: "Alice".to_string(),
            hourly_rate: dec("10"),
            standard_hours: dec("8"),
            overtime_rate: dec("15"),
        })
        .unwrap();
    roster
}

#[test]
fn generated_payslip_lands_in_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let roster = seeded_roster(&dir.path().join("employee_data.csv"));
    let ledger = LedgerStore::open(dir.path().join("payslip_data.csv"));

    let slip = generate_payslip(&roster, &ledger, &StatutoryRates::default(), "E1", dec("10"))
        .unwrap();

    assert_eq!(slip.record.gross_pay, dec("110"));
    assert_eq!(slip.record.epf, dec("12.10"));
    assert_eq!(slip.record.socso, dec("0.55"));
    assert_eq!(slip.record.net_paid, dec("97.35"));

    let records = ledger.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], slip.record);
    assert!(NaiveDateTime::parse_from_str(&records[0].datetime, TIMESTAMP_FORMAT).is_ok());
}

#[test]
fn ledger_keeps_growing_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let roster = seeded_roster(&dir.path().join("employee_data.csv"));
    let ledger_path = dir.path().join("payslip_data.csv");
    let rates = StatutoryRates::default();

    {
        let ledger = LedgerStore::open(&ledger_path);
        generate_payslip(&roster, &ledger, &rates, "E1", dec("8")).unwrap();
    }
    {
        let ledger = LedgerStore::open(&ledger_path);
        generate_payslip(&roster, &ledger, &rates, "E1", dec("12")).unwrap();
    }

    let records = LedgerStore::open(&ledger_path).load().unwrap();
    assert_eq!(records.len(), 2);
    // Two slips for the same employee are both kept, never merged
    assert_eq!(records[0].employee_id, "E1");
    assert_eq!(records[1].employee_id, "E1");
    assert_ne!(records[0].gross_pay, records[1].gross_pay);
}

#[test]
fn persist_failure_reports_error_and_keeps_prior_rows() {
    let dir = tempfile::tempdir().unwrap();
    let roster = seeded_roster(&dir.path().join("employee_data.csv"));
    let ledger_path = dir.path().join("payslip_data.csv");
    let rates = StatutoryRates::default();

    let ledger = LedgerStore::open(&ledger_path);
    generate_payslip(&roster, &ledger, &rates, "E1", dec("8")).unwrap();
    let before = std::fs::read(&ledger_path).unwrap();

    // Block the temp file slot, as another program holding the file would
    std::fs::create_dir(dir.path().join("payslip_data.csv.tmp")).unwrap();

    let err = generate_payslip(&roster, &ledger, &rates, "E1", dec("9")).unwrap_err();
    assert!(err.is_persist());

    // Prior ledger rows remain intact and readable
    assert_eq!(std::fs::read(&ledger_path).unwrap(), before);
    assert_eq!(ledger.load().unwrap().len(), 1);
}

#[test]
fn removing_employee_leaves_ledger_references_dangling() {
    let dir = tempfile::tempdir().unwrap();
    let mut roster = seeded_roster(&dir.path().join("employee_data.csv"));
    let ledger = LedgerStore::open(dir.path().join("payslip_data.csv"));
    let rates = StatutoryRates::default();

    generate_payslip(&roster, &ledger, &rates, "E1", dec("10")).unwrap();
    roster.remove("E1").unwrap();

    // The payslip survives with its now-unresolvable employee reference
    let records = ledger.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, "E1");
    assert!(roster.find("E1").is_none());
}
