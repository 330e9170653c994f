//! Pay calendar used by the income policies.
//!
//! Salaried income is spread over the number of ISO weeks in the pay year,
//! which is 52 or 53 depending on how the year falls. The calendar is derived
//! once by the caller and passed down explicitly so reports are reproducible.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{RosterError, RosterResult};

/// Number of days in a week, used by the hourly income policy.
pub const DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// The calendar a roster is computed against.
///
/// # Example
///
/// ```
/// use payroll_roster::calculation::PayCalendar;
///
/// let calendar = PayCalendar::for_year(2026).unwrap();
/// assert_eq!(calendar.weeks_in_year(), 53);
///
/// let calendar = PayCalendar::for_year(2025).unwrap();
/// assert_eq!(calendar.weeks_in_year(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayCalendar {
    iso_year: i32,
    weeks_in_year: u32,
}

impl PayCalendar {
    /// Builds the calendar for an ISO week-year.
    ///
    /// Returns `InvalidYear` if chrono cannot represent the year.
    pub fn for_year(iso_year: i32) -> RosterResult<Self> {
        if NaiveDate::from_isoywd_opt(iso_year, 1, Weekday::Mon).is_none() {
            return Err(RosterError::InvalidYear { year: iso_year });
        }

        Ok(Self {
            iso_year,
            weeks_in_year: weeks_in_iso_year(iso_year),
        })
    }

    /// Builds the calendar for the ISO week-year containing `date`.
    ///
    /// Early January dates can belong to the previous week-year and late
    /// December dates to the next one.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso_year = date.iso_week().year();
        Self {
            iso_year,
            weeks_in_year: weeks_in_iso_year(iso_year),
        }
    }

    /// Builds the calendar for today's local date.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// The ISO week-year this calendar covers.
    pub fn iso_year(&self) -> i32 {
        self.iso_year
    }

    /// Number of ISO weeks in the year (52 or 53).
    pub fn weeks_in_year(&self) -> u32 {
        self.weeks_in_year
    }

    /// [`weeks_in_year`](Self::weeks_in_year) as a decimal divisor.
    pub fn weeks_in_year_decimal(&self) -> Decimal {
        Decimal::from(self.weeks_in_year)
    }
}

// A week-year has 53 weeks exactly when its week 53 exists.
fn weeks_in_iso_year(iso_year: i32) -> u32 {
    if NaiveDate::from_isoywd_opt(iso_year, 53, Weekday::Mon).is_some() {
        53
    } else {
        52
    }
}
