//! Paydesk configuration, read from environment variables

use std::path::PathBuf;

use rust_decimal::Decimal;

/// Statutory deduction rates applied to gross pay
///
/// Lifted into configuration so a rate change never touches the
/// calculator. Rates are fractions of gross pay, not percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryRates {
    /// Employees Provident Fund rate (default 11%)
    pub epf: Decimal,
    /// Social Security Organization rate (default 0.5%)
    pub socso: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            epf: Decimal::new(11, 2),  // 0.11
            socso: Decimal::new(5, 3), // 0.005
        }
    }
}

/// Application configuration
pub struct Config {
    /// Employee roster CSV path
    pub roster_path: PathBuf,
    /// Payslip ledger CSV path
    pub ledger_path: PathBuf,
    /// Log level for the console layer
    pub log_level: String,
    /// Optional directory for rotating file logs
    pub log_dir: Option<PathBuf>,
    /// Statutory deduction rates
    pub rates: StatutoryRates,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = StatutoryRates::default();
        Self {
            roster_path: std::env::var("PAYDESK_ROSTER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("employee_data.csv")),
            ledger_path: std::env::var("PAYDESK_LEDGER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("payslip_data.csv")),
            log_level: std::env::var("PAYDESK_LOG").unwrap_or_else(|_| "warn".to_string()),
            log_dir: std::env::var("PAYDESK_LOG_DIR").map(PathBuf::from).ok(),
            rates: StatutoryRates {
                epf: std::env::var("PAYDESK_EPF_RATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.epf),
                socso: std::env::var("PAYDESK_SOCSO_RATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.socso),
            },
        }
    }
}
