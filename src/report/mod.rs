//! Roster report for the payroll roster.
//!
//! This module builds a roster from its entries, orders it by weekly income
//! and renders it either as the two-section text report or as a structured
//! [`RosterReport`].

mod printer;
mod roster;
mod summary;

pub use printer::{ASCENDING_HEADER, DESCENDING_HEADER, SECTION_FOOTER, print_all, write_report};
pub use roster::{SortOrder, build_roster, sorted_by};
pub use summary::{EmployeeSummary, RosterReport};
