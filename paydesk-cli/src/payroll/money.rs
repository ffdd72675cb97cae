//! Money rounding policy
//!
//! All currency arithmetic is done in `Decimal` and rounded to 2 decimal
//! places, half-up. Persisted values carry exactly this precision.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to the fixed policy
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
