//! Employee model.
//!
//! An [`Employee`] holds identity fields, a pay arrangement and the weekly
//! income computed from that arrangement when the record was built. The income
//! is a cached snapshot: mutating the pay fields does not change it until
//! [`Employee::recompute_weekly_income`] is called.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

use crate::calculation::{PayCalendar, Taxable};
use crate::error::{RosterError, RosterResult};

use super::pay::{CommissionPay, EmployeeKind, HourlyPay, SalariedPay};

/// Represents an employee on the roster.
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::PayCalendar;
/// use payroll_roster::models::Employee;
/// use rust_decimal::Decimal;
///
/// let calendar = PayCalendar::for_year(2026).unwrap();
/// let employee =
///     Employee::hourly("1", "A", "A1", Decimal::from(15), Decimal::from(8), &calendar).unwrap();
/// assert_eq!(employee.weekly_income, Decimal::from(840));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The pay arrangement.
    pub kind: EmployeeKind,
    /// Weekly income as of the last computation.
    pub weekly_income: Decimal,
}

impl Employee {
    /// Creates an employee with a weekly income of zero.
    ///
    /// Use one of the variant constructors to get a record whose income is
    /// already computed.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        kind: EmployeeKind,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            kind,
            weekly_income: Decimal::ZERO,
        }
    }

    /// Creates an employee and computes their weekly income.
    ///
    /// Fails with [`RosterError::IncomeOverflow`] if the income does not fit
    /// in a [`Decimal`]. The variant constructors below fail the same way.
    pub fn with_income(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        kind: EmployeeKind,
        calendar: &PayCalendar,
    ) -> RosterResult<Self> {
        let mut employee = Self::new(id, first_name, last_name, kind);
        employee.recompute_weekly_income(calendar)?;
        Ok(employee)
    }

    /// Creates an hourly employee.
    pub fn hourly(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: Decimal,
        calendar: &PayCalendar,
    ) -> RosterResult<Self> {
        let kind = EmployeeKind::Hourly(HourlyPay {
            hourly_rate,
            hours_worked,
        });
        Self::with_income(id, first_name, last_name, kind, calendar)
    }

    /// Creates a salaried employee.
    pub fn salaried(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        yearly_salary: Decimal,
        calendar: &PayCalendar,
    ) -> RosterResult<Self> {
        let kind = EmployeeKind::Salaried(SalariedPay { yearly_salary });
        Self::with_income(id, first_name, last_name, kind, calendar)
    }

    /// Creates a base-plus-commission employee.
    pub fn base_plus_commission(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        weekly_salary: Decimal,
        weekly_sales: Decimal,
        commission_rate: Decimal,
        calendar: &PayCalendar,
    ) -> RosterResult<Self> {
        let kind = EmployeeKind::BasePlusCommission(CommissionPay {
            weekly_salary,
            weekly_sales,
            commission_rate,
        });
        Self::with_income(id, first_name, last_name, kind, calendar)
    }

    /// Recomputes and stores the weekly income from the current pay fields.
    ///
    /// On overflow the cached income is left unchanged.
    pub fn recompute_weekly_income(&mut self, calendar: &PayCalendar) -> RosterResult<()> {
        self.weekly_income = self.kind.weekly_income(calendar).ok_or_else(|| {
            RosterError::IncomeOverflow {
                employee_id: self.id.clone(),
            }
        })?;
        debug!(
            employee_id = %self.id,
            kind = self.kind.label(),
            weekly_income = %self.weekly_income,
            "Computed weekly income"
        );
        Ok(())
    }

    /// Returns the multi-line description printed in reports.
    ///
    /// Identity lines come first, followed by the variant's income line.
    ///
    /// ```
    /// use payroll_roster::calculation::PayCalendar;
    /// use payroll_roster::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let calendar = PayCalendar::for_year(2026).unwrap();
    /// let employee =
    ///     Employee::hourly("1", "A", "A1", Decimal::from(15), Decimal::from(8), &calendar).unwrap();
    /// assert_eq!(
    ///     employee.describe(),
    ///     "Employee ID = 1\nFirst Name = A\nLast Name = A1\nHourlyEmployee Weekly income = 840.00\n"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee ID = {}", self.id)?;
        writeln!(f, "First Name = {}", self.first_name)?;
        writeln!(f, "Last Name = {}", self.last_name)?;
        writeln!(
            f,
            "{} Weekly income = {}",
            self.kind.label(),
            format_amount(self.weekly_income)
        )
    }
}

/// Formats a monetary amount to two decimal places, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
