//! Core data models for the payroll roster.
//!
//! This module contains the employee record, its pay variants and the audit
//! types used to explain income computations.

mod audit;
mod employee;
mod pay;
mod roster_entry;

pub use audit::AuditStep;
pub use employee::{Employee, format_amount};
pub use pay::{CommissionPay, EmployeeKind, HourlyPay, SalariedPay};
pub use roster_entry::RosterEntry;
