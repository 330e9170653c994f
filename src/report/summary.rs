//! Structured roster report.
//!
//! [`RosterReport`] captures the same content as the text report in a
//! serializable form, together with an audit trace explaining each income.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PayCalendar, calculate_weekly_income};
use crate::error::{RosterError, RosterResult};
use crate::models::{AuditStep, Employee};

use super::roster::{SortOrder, sorted_by};

/// One employee line in a structured report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The variant label, e.g. "HourlyEmployee".
    pub kind: String,
    /// The cached weekly income.
    pub weekly_income: Decimal,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            kind: employee.kind.label().to_string(),
            weekly_income: employee.weekly_income,
        }
    }
}

/// The complete structured roster report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the crate that produced the report.
    pub engine_version: String,
    /// The ISO week-year incomes were computed for.
    pub iso_year: i32,
    /// Weeks in that year (52 or 53).
    pub weeks_in_year: u32,
    /// Employees from lowest to highest weekly income.
    pub ascending: Vec<EmployeeSummary>,
    /// Employees from highest to lowest weekly income.
    pub descending: Vec<EmployeeSummary>,
    /// One audit step per employee, in roster order.
    pub audit_trace: Vec<AuditStep>,
}

impl RosterReport {
    /// Builds the report for a roster computed against `calendar`.
    ///
    /// The audit trace recomputes each income, so an employee whose pay was
    /// changed to an overflowing value after construction fails here with
    /// [`RosterError::IncomeOverflow`].
    pub fn new(roster: &[Employee], calendar: &PayCalendar) -> RosterResult<Self> {
        let audit_trace = roster
            .iter()
            .zip(1u32..)
            .map(|(employee, step_number)| {
                let result = calculate_weekly_income(&employee.kind, calendar, step_number)
                    .ok_or_else(|| RosterError::IncomeOverflow {
                        employee_id: employee.id.clone(),
                    })?;
                let mut step = result.audit_step;
                step.employee_id = employee.id.clone();
                Ok(step)
            })
            .collect::<RosterResult<Vec<AuditStep>>>()?;

        Ok(Self {
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            iso_year: calendar.iso_year(),
            weeks_in_year: calendar.weeks_in_year(),
            ascending: summarize(roster, SortOrder::Ascending),
            descending: summarize(roster, SortOrder::Descending),
            audit_trace,
        })
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> RosterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RosterError::ReportError {
            message: e.to_string(),
        })
    }
}

fn summarize(roster: &[Employee], order: SortOrder) -> Vec<EmployeeSummary> {
    sorted_by(roster, order)
        .into_iter()
        .map(EmployeeSummary::from)
        .collect()
}
