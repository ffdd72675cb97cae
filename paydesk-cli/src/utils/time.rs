//! Time helpers

use chrono::Local;

/// Ledger timestamp format (`YYYY-MM-DD HH:MM:SS`, local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted for a ledger row
pub fn ledger_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
