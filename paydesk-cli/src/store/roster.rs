//! Employee roster store
//!
//! Owns roster row identity and mutation. Every mutating operation does
//! full load -> in-memory modify -> full overwrite; the in-memory copy is
//! only updated after the overwrite succeeds, so a persist failure never
//! leaves the store claiming a change that is not on disk.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use shared::models::employee::{Employee, EmployeeCreate, EmployeeField, normalize_id};

use crate::store::table::{StoreError, TableFile};
use crate::utils::validation::{
    MAX_ID_LEN, MAX_NAME_LEN, parse_non_negative_decimal, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Roster column schema
pub const ROSTER_COLUMNS: [&str; 5] = [
    "employee_id",
    "name",
    "hourly_rate",
    "standard_hours",
    "overtime_rate",
];

/// Employee roster backed by one CSV table
pub struct RosterStore {
    file: TableFile,
    employees: Vec<Employee>,
}

impl RosterStore {
    /// Open the roster at the given path, loading it if present
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let file = TableFile::new(path, &ROSTER_COLUMNS);
        let employees = decode_table(&file)?;
        Ok(Self { file, employees })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Whether the backing file exists on disk yet
    pub fn file_exists(&self) -> bool {
        self.file.exists()
    }

    /// Re-read the backing file, discarding the in-memory copy
    pub fn reload(&mut self) -> AppResult<()> {
        self.employees = decode_table(&self.file)?;
        Ok(())
    }

    /// All roster rows, in file order
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Find an employee by trimmed-string ID comparison
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.matches_id(id))
    }

    /// Add a new employee and persist the full roster
    pub fn add(&mut self, create: EmployeeCreate) -> AppResult<Employee> {
        let id = normalize_id(&create.employee_id).to_string();
        validate_required_text(&id, "employee_id", MAX_ID_LEN)?;
        validate_required_text(&create.name, "name", MAX_NAME_LEN)?;
        require_non_negative(create.hourly_rate, "hourly_rate")?;
        require_non_negative(create.standard_hours, "standard_hours")?;
        require_non_negative(create.overtime_rate, "overtime_rate")?;

        if self.find(&id).is_some() {
            return Err(AppError::DuplicateKey(id));
        }

        let employee = Employee {
            employee_id: id,
            name: create.name.trim().to_string(),
            hourly_rate: create.hourly_rate,
            standard_hours: create.standard_hours,
            overtime_rate: create.overtime_rate,
        };

        let mut next = self.employees.clone();
        next.push(employee.clone());
        self.commit(next)?;

        tracing::info!(employee_id = %employee.employee_id, "Employee added to roster");
        Ok(employee)
    }

    /// Remove an employee and persist the full roster.
    ///
    /// The caller is responsible for operator confirmation before calling;
    /// this method mutates unconditionally.
    pub fn remove(&mut self, id: &str) -> AppResult<Employee> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::NotFound(normalize_id(id).to_string()))?;

        let mut next = self.employees.clone();
        let removed = next.remove(idx);
        self.commit(next)?;

        tracing::info!(employee_id = %removed.employee_id, "Employee removed from roster");
        Ok(removed)
    }

    /// Update one allow-listed column and persist the full roster.
    ///
    /// Numeric columns must parse as non-negative decimals; a rejected
    /// value applies no mutation at all.
    pub fn update_field(
        &mut self,
        id: &str,
        field: EmployeeField,
        raw_value: &str,
    ) -> AppResult<Employee> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::NotFound(normalize_id(id).to_string()))?;

        let mut next = self.employees.clone();
        match field {
            EmployeeField::Name => {
                validate_required_text(raw_value, "name", MAX_NAME_LEN)?;
                next[idx].name = raw_value.trim().to_string();
            }
            EmployeeField::HourlyRate => {
                next[idx].hourly_rate = parse_non_negative_decimal(raw_value, "hourly_rate")?;
            }
            EmployeeField::StandardHours => {
                next[idx].standard_hours =
                    parse_non_negative_decimal(raw_value, "standard_hours")?;
            }
            EmployeeField::OvertimeRate => {
                next[idx].overtime_rate = parse_non_negative_decimal(raw_value, "overtime_rate")?;
            }
        }
        self.commit(next)?;

        let updated = self.employees[idx].clone();
        tracing::info!(
            employee_id = %updated.employee_id,
            field = field.as_str(),
            "Employee field updated"
        );
        Ok(updated)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.matches_id(id))
    }

    /// Persist `next` and adopt it as the in-memory roster only on success
    fn commit(&mut self, next: Vec<Employee>) -> AppResult<()> {
        let rows: Vec<Vec<String>> = next.iter().map(encode_row).collect();
        if let Err(e) = self.file.persist(&rows) {
            tracing::warn!(path = %self.file.path().display(), error = %e, "Roster persist failed");
            return Err(e.into());
        }
        self.employees = next;
        Ok(())
    }
}

fn require_non_negative(value: Decimal, field: &'static str) -> AppResult<()> {
    if value.is_sign_negative() {
        return Err(AppError::invalid_value(
            field,
            format!("must be non-negative, got {value}"),
        ));
    }
    Ok(())
}

fn encode_row(employee: &Employee) -> Vec<String> {
    vec![
        employee.employee_id.clone(),
        employee.name.clone(),
        employee.hourly_rate.to_string(),
        employee.standard_hours.to_string(),
        employee.overtime_rate.to_string(),
    ]
}

fn decode_table(file: &TableFile) -> AppResult<Vec<Employee>> {
    let rows = file.load()?;
    let mut employees = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        employees.push(decode_row(file, idx, row)?);
    }
    Ok(employees)
}

fn decode_row(file: &TableFile, idx: usize, row: &[String]) -> AppResult<Employee> {
    let decimal = |col: usize, name: &str| -> AppResult<Decimal> {
        row[col].trim().parse().map_err(|_| {
            AppError::Store(StoreError::Malformed {
                path: file.path().to_path_buf(),
                reason: format!("row {}: '{}' is not a valid {}", idx + 2, row[col], name),
            })
        })
    };

    Ok(Employee {
        employee_id: row[0].trim().to_string(),
        name: row[1].clone(),
        hourly_rate: decimal(2, "hourly_rate")?,
        standard_hours: decimal(3, "standard_hours")?,
        overtime_rate: decimal(4, "overtime_rate")?,
    })
}
