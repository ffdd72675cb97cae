//! Domain models

pub mod employee;
pub mod payslip;

pub use employee::{Employee, EmployeeCreate, EmployeeField};
pub use payslip::PayslipRecord;
