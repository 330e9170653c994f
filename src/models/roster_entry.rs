//! Roster entries describing how to build each employee.

use serde::{Deserialize, Serialize};

use crate::calculation::PayCalendar;
use crate::error::RosterResult;

use super::employee::Employee;
use super::pay::EmployeeKind;

/// Everything needed to build one [`Employee`].
///
/// # Example
///
/// ```
/// use payroll_roster::calculation::PayCalendar;
/// use payroll_roster::models::RosterEntry;
/// use rust_decimal::Decimal;
///
/// let entry: RosterEntry = serde_json::from_str(r#"{
///     "id": "5",
///     "first_name": "E",
///     "last_name": "E1",
///     "pay": {
///         "type": "base_plus_commission",
///         "weekly_salary": "300",
///         "weekly_sales": "20",
///         "commission_rate": "1.5"
///     }
/// }"#).unwrap();
///
/// let employee = entry.build(&PayCalendar::for_year(2026).unwrap()).unwrap();
/// assert_eq!(employee.weekly_income, Decimal::from(330));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The pay arrangement.
    pub pay: EmployeeKind,
}

impl RosterEntry {
    /// Builds the employee, computing their weekly income against `calendar`.
    pub fn build(&self, calendar: &PayCalendar) -> RosterResult<Employee> {
        Employee::with_income(
            self.id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.pay.clone(),
            calendar,
        )
    }
}
