//! Roster construction and ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::PayCalendar;
use crate::error::RosterResult;
use crate::models::{Employee, RosterEntry};

/// Direction for ordering a roster by weekly income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lowest weekly income first.
    Ascending,
    /// Highest weekly income first.
    Descending,
}

impl SortOrder {
    /// Compares two employees by weekly income in this direction.
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortOrder::Ascending => a.weekly_income.cmp(&b.weekly_income),
            SortOrder::Descending => b.weekly_income.cmp(&a.weekly_income),
        }
    }
}

/// Builds every entry in order, computing incomes against `calendar`.
///
/// Stops at the first entry whose income overflows and returns that error.
///
/// # Example
///
/// ```
/// use payroll_roster::calculation::PayCalendar;
/// use payroll_roster::config::reference_roster;
/// use payroll_roster::report::build_roster;
///
/// let calendar = PayCalendar::for_year(2026).unwrap();
/// let roster = build_roster(&reference_roster(), &calendar).unwrap();
/// assert_eq!(roster.len(), 6);
/// assert_eq!(roster[0].id, "1");
/// ```
pub fn build_roster(
    entries: &[RosterEntry],
    calendar: &PayCalendar,
) -> RosterResult<Vec<Employee>> {
    let roster = entries
        .iter()
        .map(|entry| entry.build(calendar))
        .collect::<RosterResult<Vec<Employee>>>()?;

    info!(
        employees = roster.len(),
        iso_year = calendar.iso_year(),
        weeks_in_year = calendar.weeks_in_year(),
        "Built roster"
    );

    Ok(roster)
}

/// Returns the roster ordered by weekly income.
///
/// The sort is stable: employees with equal income keep their relative order
/// from `roster` in both directions.
pub fn sorted_by(roster: &[Employee], order: SortOrder) -> Vec<&Employee> {
    let mut sorted: Vec<&Employee> = roster.iter().collect();
    sorted.sort_by(|a, b| order.compare(a, b));
    sorted
}
