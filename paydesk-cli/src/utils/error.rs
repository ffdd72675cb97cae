//! Unified Error Handling
//!
//! Application-wide error type. Every operation error is recovered at the
//! menu boundary and reported to the operator; none is process-fatal.
//!
//! # Error classes
//!
//! | Class | Meaning |
//! |-------|---------|
//! | `NotFound` | Employee ID absent from the roster |
//! | `DuplicateKey` | Employee ID already present |
//! | `InvalidField` | Update target outside the column allow-list |
//! | `InvalidValue` | Unparsable or out-of-range input value |
//! | `Store` | Tabular store failure (read, malformed table, persist) |

use crate::store::table::StoreError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Employee {0} was not found")]
    NotFound(String),

    #[error("Employee ID {0} is already in the system")]
    DuplicateKey(String),

    #[error("Column '{0}' does not exist")]
    InvalidField(String),

    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Create an `InvalidValue` error for a field
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this error is a persist failure (store write failed,
    /// e.g. the file is locked by another program)
    pub fn is_persist(&self) -> bool {
        matches!(self, AppError::Store(StoreError::Persist { .. }))
    }
}
