//! Weekly income policies.
//!
//! Every pay arrangement implements [`Taxable`], which turns the arrangement's
//! own fields into a weekly income figure. The policies are pure and accept
//! any input, including zero and negative values. Arithmetic is checked:
//! a result outside the range of [`Decimal`] yields `None`.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CommissionPay, EmployeeKind, HourlyPay, SalariedPay};

use super::calendar::{DAYS_PER_WEEK, PayCalendar};

/// Capability of computing a weekly income.
pub trait Taxable {
    /// Returns the weekly income for this arrangement, or `None` if the
    /// result does not fit in a [`Decimal`].
    fn weekly_income(&self, calendar: &PayCalendar) -> Option<Decimal>;
}

impl Taxable for HourlyPay {
    /// `hourly_rate * hours_worked * 7`.
    ///
    /// `hours_worked` is scaled by [`DAYS_PER_WEEK`], so it behaves as a daily
    /// figure.
    fn weekly_income(&self, _calendar: &PayCalendar) -> Option<Decimal> {
        // TODO: confirm with payroll whether hours_worked is already weekly;
        // if so the DAYS_PER_WEEK factor overpays sevenfold and should go.
        self.hourly_rate
            .checked_mul(self.hours_worked)?
            .checked_mul(DAYS_PER_WEEK)
    }
}

impl Taxable for SalariedPay {
    /// `yearly_salary / weeks_in_year`.
    fn weekly_income(&self, calendar: &PayCalendar) -> Option<Decimal> {
        self.yearly_salary.checked_div(calendar.weeks_in_year_decimal())
    }
}

impl Taxable for CommissionPay {
    /// `weekly_salary + weekly_sales * commission_rate`.
    fn weekly_income(&self, _calendar: &PayCalendar) -> Option<Decimal> {
        self.weekly_sales
            .checked_mul(self.commission_rate)?
            .checked_add(self.weekly_salary)
    }
}

impl Taxable for EmployeeKind {
    fn weekly_income(&self, calendar: &PayCalendar) -> Option<Decimal> {
        compute_weekly_income(self, calendar)
    }
}

/// Computes the weekly income of any pay arrangement.
///
/// Returns `None` when the income overflows [`Decimal`].
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::{PayCalendar, compute_weekly_income};
/// use payroll_roster::models::{CommissionPay, EmployeeKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let kind = EmployeeKind::BasePlusCommission(CommissionPay {
///     weekly_salary: Decimal::from(300),
///     weekly_sales: Decimal::from(20),
///     commission_rate: Decimal::from_str("1.5").unwrap(),
/// });
/// let calendar = PayCalendar::for_year(2026).unwrap();
/// assert_eq!(compute_weekly_income(&kind, &calendar), Some(Decimal::from(330)));
///
/// let oversized = EmployeeKind::BasePlusCommission(CommissionPay {
///     weekly_salary: Decimal::ZERO,
///     weekly_sales: Decimal::MAX,
///     commission_rate: Decimal::from(2),
/// });
/// assert_eq!(compute_weekly_income(&oversized, &calendar), None);
/// ```
pub fn compute_weekly_income(kind: &EmployeeKind, calendar: &PayCalendar) -> Option<Decimal> {
    match kind {
        EmployeeKind::Hourly(pay) => pay.weekly_income(calendar),
        EmployeeKind::Salaried(pay) => pay.weekly_income(calendar),
        EmployeeKind::BasePlusCommission(pay) => pay.weekly_income(calendar),
    }
}

/// The result of a weekly income calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct WeeklyIncomeResult {
    /// The computed weekly income.
    pub income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the weekly income of a pay arrangement and records how.
///
/// The income is the same value [`compute_weekly_income`] returns, and
/// `None` is returned in the same overflow case. The audit step carries the
/// inputs, the result and the arithmetic as text.
///
/// # Arguments
///
/// * `kind` - The pay arrangement
/// * `calendar` - The calendar supplying weeks-in-year
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_weekly_income(
    kind: &EmployeeKind,
    calendar: &PayCalendar,
    step_number: u32,
) -> Option<WeeklyIncomeResult> {
    let income = compute_weekly_income(kind, calendar)?;

    let (rule_id, rule_name, input, reasoning) = match kind {
        EmployeeKind::Hourly(pay) => (
            "hourly_income",
            "Hourly Weekly Income",
            serde_json::json!({
                "hourly_rate": pay.hourly_rate.normalize().to_string(),
                "hours_worked": pay.hours_worked.normalize().to_string(),
                "days_per_week": DAYS_PER_WEEK.to_string()
            }),
            format!(
                "${} x {} hours x {} days = ${}",
                pay.hourly_rate.normalize(),
                pay.hours_worked.normalize(),
                DAYS_PER_WEEK,
                income.normalize()
            ),
        ),
        EmployeeKind::Salaried(pay) => (
            "salaried_income",
            "Salaried Weekly Income",
            serde_json::json!({
                "yearly_salary": pay.yearly_salary.normalize().to_string(),
                "weeks_in_year": calendar.weeks_in_year(),
                "iso_year": calendar.iso_year()
            }),
            format!(
                "${} / {} weeks in {} = ${}",
                pay.yearly_salary.normalize(),
                calendar.weeks_in_year(),
                calendar.iso_year(),
                income.normalize()
            ),
        ),
        EmployeeKind::BasePlusCommission(pay) => (
            "commission_income",
            "Base Plus Commission Weekly Income",
            serde_json::json!({
                "weekly_salary": pay.weekly_salary.normalize().to_string(),
                "weekly_sales": pay.weekly_sales.normalize().to_string(),
                "commission_rate": pay.commission_rate.normalize().to_string()
            }),
            format!(
                "${} + ${} x {} = ${}",
                pay.weekly_salary.normalize(),
                pay.weekly_sales.normalize(),
                pay.commission_rate.normalize(),
                income.normalize()
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        employee_id: String::new(),
        input,
        output: serde_json::json!({
            "weekly_income": income.normalize().to_string()
        }),
        reasoning,
    };

    Some(WeeklyIncomeResult { income, audit_step })
}
