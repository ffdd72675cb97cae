//! Payslip ledger store
//!
//! Append-only: rows are created by the payslip workflow, never mutated
//! or deleted. Each append re-reads the file, so records written by an
//! earlier run (or an external tool) are preserved.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use shared::models::payslip::PayslipRecord;

use crate::store::table::{StoreError, TableFile};
use crate::utils::{AppError, AppResult};

/// Ledger column schema
pub const LEDGER_COLUMNS: [&str; 8] = [
    "employee_id",
    "datetime",
    "normal_hours_paid",
    "ot_hours_paid",
    "gross_pay",
    "epf",
    "socso",
    "net_paid",
];

/// Payslip ledger backed by one CSV table
pub struct LedgerStore {
    file: TableFile,
}

impl LedgerStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            file: TableFile::new(path, &LEDGER_COLUMNS),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Append one payslip row and persist the full ledger.
    ///
    /// On persist failure the prior ledger contents remain intact on disk
    /// and the error tells the caller the record was not saved.
    pub fn append(&self, record: &PayslipRecord) -> AppResult<()> {
        let mut rows = self.file.load()?;
        rows.push(encode_row(record));
        if let Err(e) = self.file.persist(&rows) {
            tracing::warn!(
                path = %self.file.path().display(),
                employee_id = %record.employee_id,
                error = %e,
                "Ledger persist failed, payslip not saved"
            );
            return Err(e.into());
        }

        tracing::info!(
            employee_id = %record.employee_id,
            gross_pay = %record.gross_pay,
            net_paid = %record.net_paid,
            "Payslip recorded"
        );
        Ok(())
    }

    /// Load all ledger rows
    pub fn load(&self) -> AppResult<Vec<PayslipRecord>> {
        let rows = self.file.load()?;
        let mut records = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            records.push(self.decode_row(idx, row)?);
        }
        Ok(records)
    }

    fn decode_row(&self, idx: usize, row: &[String]) -> AppResult<PayslipRecord> {
        let decimal = |col: usize, name: &str| -> AppResult<Decimal> {
            row[col].trim().parse().map_err(|_| {
                AppError::Store(StoreError::Malformed {
                    path: self.file.path().to_path_buf(),
                    reason: format!("row {}: '{}' is not a valid {}", idx + 2, row[col], name),
                })
            })
        };

        Ok(PayslipRecord {
            employee_id: row[0].clone(),
            datetime: row[1].clone(),
            normal_hours_paid: decimal(2, "normal_hours_paid")?,
            ot_hours_paid: decimal(3, "ot_hours_paid")?,
            gross_pay: decimal(4, "gross_pay")?,
            epf: decimal(5, "epf")?,
            socso: decimal(6, "socso")?,
            net_paid: decimal(7, "net_paid")?,
        })
    }
}

fn encode_row(record: &PayslipRecord) -> Vec<String> {
    vec![
        record.employee_id.clone(),
        record.datetime.clone(),
        format!("{:.2}", record.normal_hours_paid),
        format!("{:.2}", record.ot_hours_paid),
        format!("{:.2}", record.gross_pay),
        format!("{:.2}", record.epf),
        format!("{:.2}", record.socso),
        format!("{:.2}", record.net_paid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PayslipRecord {
        PayslipRecord {
            employee_id: id.to_string(),
            datetime: "2026-08-06 09:30:00".to_string(),
            normal_hours_paid: Decimal::new(8000, 2),
            ot_hours_paid: Decimal::new(3000, 2),
            gross_pay: Decimal::new(11000, 2),
            epf: Decimal::new(1210, 2),
            socso: Decimal::new(55, 2),
            net_paid: Decimal::new(9735, 2),
        }
    }

    #[test]
    fn test_append_creates_file_with_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let ledger = LedgerStore::open(&path);

        ledger.append(&record("E1")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), LEDGER_COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "E1,2026-08-06 09:30:00,80.00,30.00,110.00,12.10,0.55,97.35"
        );
    }

    #[test]
    fn test_append_grows_monotonically() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = LedgerStore::open(dir.path().join("ledger.csv"));

        ledger.append(&record("E1")).unwrap();
        ledger.append(&record("E2")).unwrap();
        ledger.append(&record("E1")).unwrap();

        let records = ledger.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].employee_id, "E1");
        assert_eq!(records[1].employee_id, "E2");
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = LedgerStore::open(dir.path().join("ledger.csv"));

        let original = record("E1");
        ledger.append(&original).unwrap();

        let records = ledger.load().unwrap();
        assert_eq!(records, vec![original]);
    }

    #[test]
    fn test_failed_append_keeps_prior_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let ledger = LedgerStore::open(&path);

        ledger.append(&record("E1")).unwrap();
        let before = std::fs::read(&path).unwrap();

        // Block the temp file slot so the next persist fails
        std::fs::create_dir(dir.path().join("ledger.csv.tmp")).unwrap();

        let err = ledger.append(&record("E2")).unwrap_err();
        assert!(err.is_persist());
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(ledger.load().unwrap().len(), 1);
    }
}
