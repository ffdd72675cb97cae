//! Payslip Ledger Record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One generated payslip (one ledger row, append-only)
///
/// Rows are created once and never mutated or deleted. The `employee_id`
/// is not a foreign key the store enforces: removing an employee leaves
/// its past payslips in place, referencing the now-absent ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipRecord {
    /// Roster ID of the paid employee
    pub employee_id: String,
    /// Generation time, `YYYY-MM-DD HH:MM:SS`
    pub datetime: String,
    /// Pay credited for normal hours
    pub normal_hours_paid: Decimal,
    /// Pay credited for overtime hours
    pub ot_hours_paid: Decimal,
    /// Normal pay + overtime pay, before deductions
    pub gross_pay: Decimal,
    /// EPF deduction
    pub epf: Decimal,
    /// SOCSO deduction
    pub socso: Decimal,
    /// Gross pay minus EPF and SOCSO
    pub net_paid: Decimal,
}
