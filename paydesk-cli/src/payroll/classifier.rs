//! Work time classification

use rust_decimal::Decimal;

/// Reported work time split against an employee's standard hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedHours {
    pub normal: Decimal,
    pub overtime: Decimal,
}

/// Split actual work time into normal and overtime hours.
///
/// Hours up to `standard` are normal; anything beyond is overtime.
/// Inputs are validated non-negative decimals; the caller owns the
/// re-prompt loop for bad input.
pub fn classify_hours(actual: Decimal, standard: Decimal) -> WorkedHours {
    if actual > standard {
        WorkedHours {
            normal: standard,
            overtime: actual - standard,
        }
    } else {
        WorkedHours {
            normal: actual,
            overtime: Decimal::ZERO,
        }
    }
}
