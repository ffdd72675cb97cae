//! Input validation helpers
//!
//! Centralized text limits and validated parses. The stores and the pay
//! pipeline stay free of interactive I/O: the menu loop calls these in
//! its own re-prompt loop and only hands validated values downstream.

use rust_decimal::Decimal;

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Employee IDs and other short identifiers
pub const MAX_ID_LEN: usize = 100;

/// Display names
pub const MAX_NAME_LEN: usize = 200;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &'static str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_value(field, "must not be empty"));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_value(
            field,
            format!("is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Parse a non-negative decimal from operator input.
///
/// Rejection never mutates anything: callers re-prompt or report and
/// leave their state untouched.
pub fn parse_non_negative_decimal(raw: &str, field: &'static str) -> AppResult<Decimal> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_value(field, format!("'{}' is not a number", raw.trim())))?;

    if value.is_sign_negative() {
        return Err(AppError::invalid_value(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }

    Ok(value)
}
