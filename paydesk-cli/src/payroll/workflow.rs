//! Payslip generation workflow
//!
//! Linear pipeline over the roster, the pay arithmetic, and the ledger:
//! lookup -> classify -> gross -> deductions -> record. Nothing is
//! written before the final step, so an abort at any earlier stage
//! leaves both stores untouched.

use rust_decimal::Decimal;
use shared::models::employee::{Employee, normalize_id};
use shared::models::payslip::PayslipRecord;

use crate::config::StatutoryRates;
use crate::payroll::calculator::{Deductions, GrossPay, gross_pay, statutory_deductions};
use crate::payroll::classifier::{WorkedHours, classify_hours};
use crate::store::ledger::LedgerStore;
use crate::store::roster::RosterStore;
use crate::utils::time::ledger_timestamp;
use crate::utils::{AppError, AppResult};

/// A fully computed payslip, ready to record
#[derive(Debug, Clone)]
pub struct GeneratedPayslip {
    pub employee: Employee,
    pub hours: WorkedHours,
    pub gross: GrossPay,
    pub deductions: Deductions,
    pub record: PayslipRecord,
}

/// Compute a payslip without persisting anything.
///
/// Fails with `NotFound` when the roster has no matching employee; the
/// caller can then display the breakdown before deciding to record it.
pub fn compute_payslip(
    roster: &RosterStore,
    rates: &StatutoryRates,
    employee_id: &str,
    actual_hours: Decimal,
) -> AppResult<GeneratedPayslip> {
    let employee = roster
        .find(employee_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(normalize_id(employee_id).to_string()))?;

    let hours = classify_hours(actual_hours, employee.standard_hours);
    let gross = gross_pay(&hours, employee.hourly_rate, employee.overtime_rate);
    let deductions = statutory_deductions(gross.total, rates);

    let record = PayslipRecord {
        employee_id: employee.employee_id.clone(),
        datetime: ledger_timestamp(),
        normal_hours_paid: gross.normal_pay,
        ot_hours_paid: gross.ot_pay,
        gross_pay: gross.total,
        epf: deductions.epf,
        socso: deductions.socso,
        net_paid: deductions.net_pay,
    };

    Ok(GeneratedPayslip {
        employee,
        hours,
        gross,
        deductions,
        record,
    })
}

/// Compute a payslip and append it to the ledger.
///
/// Returns the generated payslip only once it is persisted; a persist
/// failure surfaces as an error and the ledger keeps its prior rows.
pub fn generate_payslip(
    roster: &RosterStore,
    ledger: &LedgerStore,
    rates: &StatutoryRates,
    employee_id: &str,
    actual_hours: Decimal,
) -> AppResult<GeneratedPayslip> {
    let slip = compute_payslip(roster, rates, employee_id, actual_hours)?;
    ledger.append(&slip.record)?;
    Ok(slip)
}
