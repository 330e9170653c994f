//! Calculation logic for the payroll roster.
//!
//! This module contains the pay calendar and the weekly income policies for
//! hourly, salaried and base-plus-commission employees.

mod calendar;
mod weekly_income;

pub use calendar::{DAYS_PER_WEEK, PayCalendar};
pub use weekly_income::{
    Taxable, WeeklyIncomeResult, calculate_weekly_income, compute_weekly_income,
};
