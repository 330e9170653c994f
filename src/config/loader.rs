//! Roster file loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rosters from
//! YAML files, and the built-in reference roster.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::PayCalendar;
use crate::error::{RosterError, RosterResult};
use crate::models::{CommissionPay, EmployeeKind, HourlyPay, RosterEntry, SalariedPay};

use super::types::RosterConfig;

/// Loads and provides access to a roster configuration.
///
/// # File Format
///
/// ```text
/// calendar:
///   year: 2026            # optional, ISO week-year
/// employees:
///   - id: "1"
///     first_name: A
///     last_name: A1
///     pay:
///       type: hourly      # hourly | salaried | base_plus_commission
///       hourly_rate: 15
///       hours_worked: 8
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml")?;
/// let calendar = loader.calendar(None)?;
/// println!("{} employees, {} weeks", loader.entries().len(), calendar.weeks_in_year());
/// # Ok::<(), payroll_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads a roster from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown pay types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RosterConfig =
            serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(
            path = %path_str,
            employees = config.employees.len(),
            "Loaded roster file"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RosterConfig) -> Self {
        Self { config }
    }

    /// A loader over the built-in [`reference_roster`] with no fixed calendar.
    pub fn reference() -> Self {
        Self::from_config(RosterConfig {
            calendar: None,
            employees: reference_roster(),
        })
    }

    /// Returns the roster entries in file order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.config.employees
    }

    /// Resolves the pay calendar.
    ///
    /// `year_override` wins over the file's `calendar.year`. With neither,
    /// the calendar is derived from today's date.
    pub fn calendar(&self, year_override: Option<i32>) -> RosterResult<PayCalendar> {
        let year = year_override.or(self.config.calendar.as_ref().map(|c| c.year));
        match year {
            Some(year) => PayCalendar::for_year(year),
            None => Ok(PayCalendar::current()),
        }
    }
}

/// The six-employee reference roster: two of each pay arrangement.
pub fn reference_roster() -> Vec<RosterEntry> {
    fn entry(id: &str, first_name: &str, last_name: &str, pay: EmployeeKind) -> RosterEntry {
        RosterEntry {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            pay,
        }
    }

    fn hourly(rate: i64, hours: i64) -> EmployeeKind {
        EmployeeKind::Hourly(HourlyPay {
            hourly_rate: Decimal::from(rate),
            hours_worked: Decimal::from(hours),
        })
    }

    fn salaried(salary: i64) -> EmployeeKind {
        EmployeeKind::Salaried(SalariedPay {
            yearly_salary: Decimal::from(salary),
        })
    }

    // Commission rates are given in tenths.
    fn commission(base: i64, sales: i64, rate_tenths: i64) -> EmployeeKind {
        EmployeeKind::BasePlusCommission(CommissionPay {
            weekly_salary: Decimal::from(base),
            weekly_sales: Decimal::from(sales),
            commission_rate: Decimal::new(rate_tenths, 1),
        })
    }

    vec![
        entry("1", "A", "A1", hourly(15, 8)),
        entry("2", "B", "B1", hourly(18, 6)),
        entry("3", "C", "C1", salaried(150_000)),
        entry("4", "D", "D1", salaried(300_000)),
        entry("5", "E", "E1", commission(300, 20, 15)),
        entry("6", "F", "F1", commission(400, 30, 25)),
    ]
}
