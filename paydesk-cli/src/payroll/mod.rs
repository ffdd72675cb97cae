//! Payroll computation
//!
//! The pay pipeline: classify reported work time into normal/overtime
//! hours, derive gross pay, apply statutory deductions, and record the
//! resulting payslip. Everything up to the ledger append is pure decimal
//! arithmetic with a fixed 2-decimal half-up rounding policy.

pub mod calculator;
pub mod classifier;
pub mod money;
pub mod workflow;

pub use calculator::{Deductions, GrossPay, gross_pay, statutory_deductions};
pub use classifier::{WorkedHours, classify_hours};
pub use workflow::{GeneratedPayslip, compute_payslip, generate_payslip};
