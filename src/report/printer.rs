//! Text rendering of the roster report.

use std::io::Write;

use tracing::warn;

use crate::error::RosterResult;
use crate::models::Employee;

use super::roster::{SortOrder, sorted_by};

/// Header of the ascending section.
pub const ASCENDING_HEADER: &str = "-------------- Low income to High ----------------";
/// Header of the descending section.
pub const DESCENDING_HEADER: &str = "------------- High income to Low -----------------";
/// Footer closing each section.
pub const SECTION_FOOTER: &str = "--------------------------------------------------";

/// Writes each employee's description in the given order.
///
/// Every description is followed by a blank line.
pub fn print_all<'a, W, I>(employees: I, writer: &mut W) -> RosterResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Employee>,
{
    for employee in employees {
        writeln!(writer, "{}", employee)?;
    }
    Ok(())
}

/// Writes the two-section roster report.
///
/// The first section lists employees from lowest to highest weekly income,
/// the second from highest to lowest. An empty roster writes nothing.
///
/// # Example
///
/// ```
/// use payroll_roster::calculation::PayCalendar;
/// use payroll_roster::models::Employee;
/// use payroll_roster::report::write_report;
/// use rust_decimal::Decimal;
///
/// let calendar = PayCalendar::for_year(2026).unwrap();
/// let employee =
///     Employee::hourly("1", "A", "A1", Decimal::from(15), Decimal::from(8), &calendar).unwrap();
/// let roster = vec![employee];
///
/// let mut out = Vec::new();
/// write_report(&roster, &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("-------------- Low income to High"));
/// assert!(text.contains("HourlyEmployee Weekly income = 840.00"));
/// ```
pub fn write_report<W: Write>(roster: &[Employee], writer: &mut W) -> RosterResult<()> {
    if roster.is_empty() {
        warn!("Roster is empty, nothing to report");
        return Ok(());
    }

    writeln!(writer, "{}", ASCENDING_HEADER)?;
    print_all(sorted_by(roster, SortOrder::Ascending), writer)?;
    writeln!(writer, "{}", SECTION_FOOTER)?;

    writeln!(writer)?;

    writeln!(writer, "{}", DESCENDING_HEADER)?;
    print_all(sorted_by(roster, SortOrder::Descending), writer)?;
    writeln!(writer, "{}", SECTION_FOOTER)?;

    Ok(())
}
