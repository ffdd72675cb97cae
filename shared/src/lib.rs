//! Shared types for Paydesk
//!
//! Domain models used across the workspace: the employee roster row,
//! the payslip ledger row, and their create/update payloads.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::employee::{Employee, EmployeeCreate, EmployeeField, normalize_id};
pub use models::payslip::PayslipRecord;
