//! Employee Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalize an employee ID for lookup.
///
/// IDs are compared as trimmed strings: `" 001 "` matches `"001"`, and a
/// numeric-looking ID such as `"001"` never matches `"1"`.
pub fn normalize_id(raw: &str) -> &str {
    raw.trim()
}

/// Employee master record (one roster row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique roster key, never empty
    pub employee_id: String,
    /// Display name
    pub name: String,
    /// Currency per normal hour, non-negative
    pub hourly_rate: Decimal,
    /// Hours worked before overtime applies, non-negative
    pub standard_hours: Decimal,
    /// Currency per overtime hour, non-negative
    pub overtime_rate: Decimal,
}

impl Employee {
    /// Trimmed-string ID match
    pub fn matches_id(&self, id: &str) -> bool {
        self.employee_id == normalize_id(id)
    }
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub name: String,
    pub hourly_rate: Decimal,
    pub standard_hours: Decimal,
    pub overtime_rate: Decimal,
}

/// Updatable roster columns
///
/// The allow-list for single-field updates. `employee_id` is deliberately
/// absent: row identity is immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Name,
    HourlyRate,
    StandardHours,
    OvertimeRate,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 4] = [
        EmployeeField::Name,
        EmployeeField::HourlyRate,
        EmployeeField::StandardHours,
        EmployeeField::OvertimeRate,
    ];

    /// Column name as stored in the roster header
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeField::Name => "name",
            EmployeeField::HourlyRate => "hourly_rate",
            EmployeeField::StandardHours => "standard_hours",
            EmployeeField::OvertimeRate => "overtime_rate",
        }
    }

    /// Parse an operator-supplied column name (case-insensitive, trimmed)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "name" => Some(EmployeeField::Name),
            "hourly_rate" => Some(EmployeeField::HourlyRate),
            "standard_hours" => Some(EmployeeField::StandardHours),
            "overtime_rate" => Some(EmployeeField::OvertimeRate),
            _ => None,
        }
    }

    /// Whether the column holds a decimal value
    pub fn is_numeric(self) -> bool {
        !matches!(self, EmployeeField::Name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id_trims_whitespace() {
        assert_eq!(normalize_id("  E1  "), "E1");
        assert_eq!(normalize_id("001"), "001");
    }

    #[test]
    fn test_id_comparison_is_textual() {
        let employee = Employee {
            employee_id: "001".to_string(),
            name: "Alice".to_string(),
            hourly_rate: Decimal::new(10, 0),
            standard_hours: Decimal::new(8, 0),
            overtime_rate: Decimal::new(15, 0),
        };

        assert!(employee.matches_id("001"));
        assert!(employee.matches_id(" 001 "));
        // "1" and "001" are different IDs even though they are numerically equal
        assert!(!employee.matches_id("1"));
    }

    #[test]
    fn test_field_parse_accepts_all_columns() {
        for field in EmployeeField::ALL {
            assert_eq!(EmployeeField::parse(field.as_str()), Some(field));
        }
        // Case-insensitive with surrounding whitespace
        assert_eq!(
            EmployeeField::parse(" Hourly_Rate "),
            Some(EmployeeField::HourlyRate)
        );
    }

    #[test]
    fn test_field_parse_rejects_unknown_columns() {
        assert_eq!(EmployeeField::parse("employee_id"), None);
        assert_eq!(EmployeeField::parse("salary"), None);
        assert_eq!(EmployeeField::parse(""), None);
    }

    #[test]
    fn test_numeric_fields() {
        assert!(!EmployeeField::Name.is_numeric());
        assert!(EmployeeField::HourlyRate.is_numeric());
        assert!(EmployeeField::StandardHours.is_numeric());
        assert!(EmployeeField::OvertimeRate.is_numeric());
    }
}
