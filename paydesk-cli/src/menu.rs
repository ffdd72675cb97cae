//! Interactive operator menu
//!
//! Owns all console I/O: prompts, re-prompt loops for invalid numbers,
//! roster rendering, and the payslip breakdown. Operation errors are
//! recovered here and reported as messages; only end-of-input or an
//! explicit exit leaves the loop.

use std::io::{self, Write};

use rust_decimal::Decimal;
use shared::models::employee::{EmployeeCreate, EmployeeField};

use crate::config::{Config, StatutoryRates};
use crate::payroll::workflow::{self, GeneratedPayslip};
use crate::store::roster::ROSTER_COLUMNS;
use crate::store::{LedgerStore, RosterStore};
use crate::utils::validation::parse_non_negative_decimal;
use crate::utils::{AppError, AppResult};

pub struct Menu {
    roster: RosterStore,
    ledger: LedgerStore,
    rates: StatutoryRates,
}

impl Menu {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            roster: RosterStore::open(&config.roster_path)?,
            ledger: LedgerStore::open(&config.ledger_path),
            rates: config.rates.clone(),
        })
    }

    /// Main loop. Returns when the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            println!("{}", "=".repeat(40));
            println!("{:^40}", "PAYROLL MANAGEMENT SYSTEM");
            println!("{}", "=".repeat(40));
            println!(" [A] Load File");
            println!(" [B] Add Employee");
            println!(" [C] Remove Employee");
            println!(" [D] Update Employee Info");
            println!(" [E] Generate Pay Slip");
            println!(" [X] Exit");
            println!("{}", "-".repeat(40));

            let Some(choice) = prompt("Select an option: ")? else {
                println!("\nExit Successfully");
                break;
            };

            match choice.to_uppercase().as_str() {
                "A" => self.load_roster(),
                "B" => self.add_employee()?,
                "C" => self.remove_employee()?,
                "D" => self.update_employee()?,
                "E" => self.generate_payslip()?,
                "X" => {
                    println!("\nExiting System. Goodbye.\n");
                    break;
                }
                _ => println!("\n[!] Invalid choice. Please try again.\n"),
            }
        }
        Ok(())
    }

    fn load_roster(&mut self) {
        if !self.roster.file_exists() {
            println!(
                "\n[!] File '{}' not found. Please add an employee first.\n",
                self.roster.path().display()
            );
            return;
        }
        if let Err(e) = self.roster.reload() {
            println!("\n[!] Error reading file: {e}\n");
            return;
        }

        println!("\n{}", "=".repeat(50));
        println!("{:^50}", "EMPLOYEE DATABASE");
        println!("{}", "=".repeat(50));
        self.render_roster();
        println!("{}\n", "=".repeat(50));
    }

    fn render_roster(&self) {
        let rows: Vec<[String; 5]> = self
            .roster
            .list()
            .iter()
            .map(|e| {
                [
                    e.employee_id.clone(),
                    e.name.clone(),
                    e.hourly_rate.to_string(),
                    e.standard_hours.to_string(),
                    e.overtime_rate.to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = ROSTER_COLUMNS.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let header: Vec<String> = ROSTER_COLUMNS
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{h:>width$}", width = *w))
            .collect();
        println!("{}", header.join("  "));

        for row in &rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:>width$}", width = *w))
                .collect();
            println!("{}", line.join("  "));
        }
    }

    fn add_employee(&mut self) -> io::Result<()> {
        println!("\n{:^30}", "ADD NEW EMPLOYEE");
        println!("{}", "-".repeat(30));

        let Some(id) = prompt("Employee ID: ")? else {
            return Ok(());
        };
        if self.roster.find(&id).is_some() {
            println!("\n[!] Employee ID {id} is already in the system!\n");
            return Ok(());
        }

        let Some(name) = prompt("Employee Name: ")? else {
            return Ok(());
        };
        let Some(hourly_rate) = prompt_decimal("Hourly Rate (RM): ", "hourly_rate")? else {
            return Ok(());
        };
        let Some(standard_hours) =
            prompt_decimal("Standard Working Hours: ", "standard_hours")?
        else {
            return Ok(());
        };
        let Some(overtime_rate) = prompt_decimal("Overtime Rate (RM): ", "overtime_rate")? else {
            return Ok(());
        };

        let create = EmployeeCreate {
            employee_id: id,
            name,
            hourly_rate,
            standard_hours,
            overtime_rate,
        };
        match self.roster.add(create) {
            Ok(employee) => {
                println!(
                    "\n[+] {} has been added to the system successfully!\n",
                    employee.name
                );
            }
            Err(e) => println!("\n[!] {e}\n"),
        }
        Ok(())
    }

    fn remove_employee(&mut self) -> io::Result<()> {
        if !self.roster.file_exists() {
            println!("\n[!] Database not found.\n");
            return Ok(());
        }

        let Some(id) = prompt("Employee you want to remove (ID): ")? else {
            return Ok(());
        };
        if self.roster.find(&id).is_none() {
            println!("\n[!] Employee {id} was not found!\n");
            return Ok(());
        }

        println!("\n[?] Warning: This action is irreversible.");
        let confirm = prompt(&format!("Type 'Y' to confirm removing Employee {id}: "))?;
        // Anything but an explicit Y cancels with no mutation
        if confirm.as_deref().is_none_or(|c| !c.eq_ignore_ascii_case("y")) {
            println!("\n[i] Action canceled.\n");
            return Ok(());
        }

        match self.roster.remove(&id) {
            Ok(_) => println!("\n[+] Employee {id} has successfully been removed.\n"),
            Err(e) => println!("\n[!] {e}\n"),
        }
        Ok(())
    }

    fn update_employee(&mut self) -> io::Result<()> {
        if !self.roster.file_exists() {
            println!("\n[!] Database not found.\n");
            return Ok(());
        }

        let Some(id) = prompt("Which employee's info you want to update (ID): ")? else {
            return Ok(());
        };
        if self.roster.find(&id).is_none() {
            println!("\n[!] Employee {id} was not found!\n");
            return Ok(());
        }

        let columns: Vec<&str> = EmployeeField::ALL.iter().map(|f| f.as_str()).collect();
        println!("\nAvailable columns: {columns:?}");
        let Some(raw_field) = prompt("Column to update: ")? else {
            return Ok(());
        };
        let Some(field) = EmployeeField::parse(&raw_field) else {
            println!("\n[!] {}\n", AppError::InvalidField(raw_field));
            return Ok(());
        };

        let Some(value) = prompt(&format!("Type your update info for {}: ", field.as_str()))?
        else {
            return Ok(());
        };

        match self.roster.update_field(&id, field, &value) {
            Ok(updated) => println!(
                "\n[+] Info '{}' for Employee {} updated.\n",
                field.as_str(),
                updated.employee_id
            ),
            Err(e) => println!("\n[!] {e}\n"),
        }
        Ok(())
    }

    fn generate_payslip(&mut self) -> io::Result<()> {
        if !self.roster.file_exists() || self.roster.is_empty() {
            println!("\n[!] No employee database found.\n");
            return Ok(());
        }

        println!("\n{}", "=".repeat(40));
        println!("{:^40}", "GENERATE PAYSLIP");
        println!("{}", "=".repeat(40));

        let Some(id) = prompt("Enter Employee ID: ")? else {
            return Ok(());
        };
        let Some(employee) = self.roster.find(&id) else {
            println!("\n[!] Employee {id} was not found!\n");
            return Ok(());
        };
        println!(
            "Generating Slip for: {} (ID: {})",
            employee.name, employee.employee_id
        );

        let Some(actual_hours) = prompt_decimal(
            &format!("Input actual work time for ID {id}: "),
            "actual work time",
        )?
        else {
            return Ok(());
        };

        let slip = match workflow::compute_payslip(&self.roster, &self.rates, &id, actual_hours) {
            Ok(slip) => slip,
            Err(e) => {
                println!("\n[!] {e}\n");
                return Ok(());
            }
        };

        self.render_payslip(&slip);

        match self.ledger.append(&slip.record) {
            Ok(()) => println!(
                "\n[+] New Salary Record for Employee ID: {} has been saved.\n",
                slip.record.employee_id
            ),
            Err(e) => {
                println!("\n[!] {e}");
                println!("[!] The payslip was computed but has NOT been saved.\n");
            }
        }
        Ok(())
    }

    fn render_payslip(&self, slip: &GeneratedPayslip) {
        println!("\n{:^30}", "WORK SUMMARY");
        println!("{}", "-".repeat(30));
        println!("Normal Hours : {:.1} hrs", slip.hours.normal);
        println!("Overtime     : {:.1} hrs", slip.hours.overtime);
        println!("{}\n", "-".repeat(30));

        println!("{:^30}", "PAYMENT BREAKDOWN");
        println!("{}", "-".repeat(30));
        println!("Normal Pay   : RM {:>8.2}", slip.gross.normal_pay);
        println!("OT Pay       : RM {:>8.2}", slip.gross.ot_pay);
        println!("{}", "-".repeat(30));
        println!("Gross Pay    : RM {:>8.2}", slip.gross.total);
        println!("{}\n", "=".repeat(30));

        println!("{:^30}", "DEDUCTIONS");
        println!("{}", "-".repeat(30));
        println!(
            "EPF ({}%)    : RM {:>8.2}",
            percent(self.rates.epf),
            slip.deductions.epf
        );
        println!(
            "SOCSO ({}%) : RM {:>8.2}",
            percent(self.rates.socso),
            slip.deductions.socso
        );
        println!("{}", "-".repeat(30));
        println!("NET SALARY   : RM {:>8.2}", slip.deductions.net_pay);
        println!("{}\n", "=".repeat(30));
    }
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Read one trimmed line; `None` means end of input.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read a non-negative decimal, re-prompting until one parses.
fn prompt_decimal(label: &str, field: &'static str) -> io::Result<Option<Decimal>> {
    loop {
        let Some(raw) = prompt(label)? else {
            return Ok(None);
        };
        match parse_non_negative_decimal(&raw, field) {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("[!] Invalid input! Please enter a number."),
        }
    }
}
