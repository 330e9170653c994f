//! Pay arrangements for the employee variants.
//!
//! Each variant carries only the fields its income policy reads. The
//! arrangement is tagged with `type` when serialized so roster files can
//! select the variant by name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pay fields for an hourly employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPay {
    /// The rate paid per hour worked.
    pub hourly_rate: Decimal,
    /// The hours worked per day.
    pub hours_worked: Decimal,
}

/// Pay fields for a salaried employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariedPay {
    /// The gross salary for the whole year.
    pub yearly_salary: Decimal,
}

/// Pay fields for a base-plus-commission employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionPay {
    /// The fixed weekly base salary.
    pub weekly_salary: Decimal,
    /// The value of sales made in the week.
    pub weekly_sales: Decimal,
    /// Raw multiplier applied to sales (1.5 means 150%).
    pub commission_rate: Decimal,
}

/// The pay arrangement of an employee, one of three mutually exclusive kinds.
///
/// # Example
///
/// ```
/// use payroll_roster::models::{EmployeeKind, HourlyPay};
/// use rust_decimal::Decimal;
///
/// let kind: EmployeeKind = serde_json::from_str(
///     r#"{"type": "hourly", "hourly_rate": "15", "hours_worked": "8"}"#,
/// ).unwrap();
/// assert_eq!(
///     kind,
///     EmployeeKind::Hourly(HourlyPay {
///         hourly_rate: Decimal::from(15),
///         hours_worked: Decimal::from(8),
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid by the hour.
    Hourly(HourlyPay),
    /// Paid a yearly salary spread over the weeks of the year.
    Salaried(SalariedPay),
    /// Paid a weekly base plus commission on sales.
    BasePlusCommission(CommissionPay),
}

impl EmployeeKind {
    /// The label used in employee descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Hourly(_) => "HourlyEmployee",
            EmployeeKind::Salaried(_) => "SalariedEmployee",
            EmployeeKind::BasePlusCommission(_) => "BasePlusCommissionEmployee",
        }
    }
}
