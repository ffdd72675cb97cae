//! Payroll arithmetic
//!
//! Pure functions from hours and rates to pay components. Statutory
//! rates come from configuration, not constants baked in here.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::payroll::classifier::WorkedHours;
use crate::payroll::money::round_money;

/// Gross pay breakdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrossPay {
    pub normal_pay: Decimal,
    pub ot_pay: Decimal,
    /// normal_pay + ot_pay
    pub total: Decimal,
}

/// Statutory deductions and the resulting net pay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deductions {
    pub epf: Decimal,
    pub socso: Decimal,
    /// gross - epf - socso
    pub net_pay: Decimal,
}

/// Derive normal, overtime, and total gross pay.
pub fn gross_pay(hours: &WorkedHours, hourly_rate: Decimal, overtime_rate: Decimal) -> GrossPay {
    let normal_pay = round_money(hours.normal * hourly_rate);
    let ot_pay = round_money(hours.overtime * overtime_rate);
    GrossPay {
        normal_pay,
        ot_pay,
        total: normal_pay + ot_pay,
    }
}

/// Apply statutory deductions to gross pay.
///
/// Net pay is the remainder after the rounded deductions, so
/// `epf + socso + net_pay == gross` holds exactly.
pub fn statutory_deductions(gross: Decimal, rates: &StatutoryRates) -> Deductions {
    let epf = round_money(gross * rates.epf);
    let socso = round_money(gross * rates.socso);
    Deductions {
        epf,
        socso,
        net_pay: gross - epf - socso,
    }
}
