//! Integration tests for the payroll roster.
//!
//! This test suite covers the full flow from roster file to report:
//! - Loading the reference roster file
//! - Computing incomes for every pay arrangement
//! - Ordering in both directions
//! - Text and JSON reports
//! - Error cases

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use payroll_roster::calculation::PayCalendar;
use payroll_roster::config::{ConfigLoader, reference_roster};
use payroll_roster::error::RosterError;
use payroll_roster::models::{Employee, EmployeeKind};
use payroll_roster::report::{RosterReport, SortOrder, build_roster, sorted_by, write_report};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load_reference() -> ConfigLoader {
    ConfigLoader::load("./config/roster.yaml").expect("Failed to load roster")
}

fn render(roster: &[Employee]) -> String {
    let mut out = Vec::new();
    write_report(roster, &mut out).expect("Failed to write report");
    String::from_utf8(out).unwrap()
}

fn ids(employees: &[&Employee]) -> Vec<String> {
    employees.iter().map(|e| e.id.clone()).collect()
}

// =============================================================================
// Income Scenarios
// =============================================================================

#[test]
fn test_hourly_fifteen_by_eight_is_840() {
    let calendar = PayCalendar::for_year(2026).unwrap();
    let employee = Employee::hourly("1", "A", "A1", dec("15"), dec("8"), &calendar).unwrap();
    assert_eq!(employee.weekly_income, dec("840"));
}

#[test]
fn test_commission_three_hundred_plus_twenty_at_one_and_half_is_330() {
    let calendar = PayCalendar::for_year(2026).unwrap();
    let employee =
        Employee::base_plus_commission("5", "E", "E1", dec("300"), dec("20"), dec("1.5"), &calendar)
            .unwrap();
    assert_eq!(employee.weekly_income, dec("330"));
}

#[test]
fn test_salaried_income_depends_on_calendar() {
    let long = PayCalendar::for_year(2026).unwrap();
    let short = PayCalendar::for_year(2025).unwrap();

    let in_long = Employee::salaried("3", "C", "C1", dec("150000"), &long).unwrap();
    let in_short = Employee::salaried("3", "C", "C1", dec("150000"), &short).unwrap();

    assert_eq!(in_long.weekly_income, dec("150000") / Decimal::from(53));
    assert_eq!(in_short.weekly_income, dec("150000") / Decimal::from(52));
    assert!(in_short.weekly_income > in_long.weekly_income);
}

// =============================================================================
// Reference Roster
// =============================================================================

#[test]
fn test_reference_roster_ascending_spans_min_to_max() {
    let loader = load_reference();
    let calendar = loader.calendar(None).unwrap();
    let roster = build_roster(loader.entries(), &calendar).unwrap();

    let weeks = calendar.weeks_in_year_decimal();
    let candidates = [
        dec("840"),
        dec("756"),
        dec("150000") / weeks,
        dec("300000") / weeks,
        dec("330"),
        dec("475"),
    ];
    let min = candidates.iter().min().unwrap();
    let max = candidates.iter().max().unwrap();

    let ascending = sorted_by(&roster, SortOrder::Ascending);
    assert_eq!(&ascending.first().unwrap().weekly_income, min);
    assert_eq!(&ascending.last().unwrap().weekly_income, max);
}

#[test]
fn test_reference_roster_order_is_stable_across_calendars() {
    for year in [2025, 2026] {
        let calendar = PayCalendar::for_year(year).unwrap();
        let roster = build_roster(&reference_roster(), &calendar).unwrap();

        assert_eq!(
            ids(&sorted_by(&roster, SortOrder::Ascending)),
            vec!["5", "6", "2", "1", "3", "4"]
        );
        assert_eq!(
            ids(&sorted_by(&roster, SortOrder::Descending)),
            vec!["4", "3", "1", "2", "6", "5"]
        );
    }
}

#[test]
fn test_reference_file_and_builtin_build_same_roster() {
    let loader = load_reference();
    let calendar = loader.calendar(None).unwrap();

    let from_file = build_roster(loader.entries(), &calendar).unwrap();
    let builtin = build_roster(&reference_roster(), &calendar).unwrap();

    assert_eq!(from_file, builtin);
}

#[test]
fn test_full_text_report_for_2026() {
    let loader = load_reference();
    let calendar = loader.calendar(None).unwrap();
    let roster = build_roster(loader.entries(), &calendar).unwrap();

    let expected = "\
-------------- Low income to High ----------------
Employee ID = 5
First Name = E
Last Name = E1
BasePlusCommissionEmployee Weekly income = 330.00

Employee ID = 6
First Name = F
Last Name = F1
BasePlusCommissionEmployee Weekly income = 475.00

Employee ID = 2
First Name = B
Last Name = B1
HourlyEmployee Weekly income = 756.00

Employee ID = 1
First Name = A
Last Name = A1
HourlyEmployee Weekly income = 840.00

Employee ID = 3
First Name = C
Last Name = C1
SalariedEmployee Weekly income = 2830.19

Employee ID = 4
First Name = D
Last Name = D1
SalariedEmployee Weekly income = 5660.38

--------------------------------------------------

------------- High income to Low -----------------
Employee ID = 4
First Name = D
Last Name = D1
SalariedEmployee Weekly income = 5660.38

Employee ID = 3
First Name = C
Last Name = C1
SalariedEmployee Weekly income = 2830.19

Employee ID = 1
First Name = A
Last Name = A1
HourlyEmployee Weekly income = 840.00

Employee ID = 2
First Name = B
Last Name = B1
HourlyEmployee Weekly income = 756.00

Employee ID = 6
First Name = F
Last Name = F1
BasePlusCommissionEmployee Weekly income = 475.00

Employee ID = 5
First Name = E
Last Name = E1
BasePlusCommissionEmployee Weekly income = 330.00

--------------------------------------------------
";

    assert_eq!(render(&roster), expected);
}

#[test]
fn test_text_report_with_year_override() {
    let loader = load_reference();
    let calendar = loader.calendar(Some(2025)).unwrap();
    let roster = build_roster(loader.entries(), &calendar).unwrap();

    let text = render(&roster);
    assert!(text.contains("SalariedEmployee Weekly income = 2884.62\n"));
    assert!(text.contains("SalariedEmployee Weekly income = 5769.23\n"));
}

#[test]
fn test_empty_roster_produces_no_report() {
    let calendar = PayCalendar::for_year(2026).unwrap();
    let roster = build_roster(&[], &calendar).unwrap();
    assert!(render(&roster).is_empty());
}

// =============================================================================
// Cached Income
// =============================================================================

#[test]
fn test_mutated_pay_does_not_resort_until_recomputed() {
    let calendar = PayCalendar::for_year(2026).unwrap();
    let mut roster = build_roster(&reference_roster(), &calendar).unwrap();

    // Give employee 5 a huge commission rate without recomputing.
    if let EmployeeKind::BasePlusCommission(pay) = &mut roster[4].kind {
        pay.commission_rate = dec("1000");
    }
    let ascending = sorted_by(&roster, SortOrder::Ascending);
    assert_eq!(ascending[0].id, "5");

    roster[4].recompute_weekly_income(&calendar).unwrap();
    assert_eq!(roster[4].weekly_income, dec("20300"));
    let ascending = sorted_by(&roster, SortOrder::Ascending);
    assert_eq!(ascending.last().unwrap().id, "5");
}

// =============================================================================
// JSON Report
// =============================================================================

#[test]
fn test_json_report_round_trips() {
    let loader = load_reference();
    let calendar = loader.calendar(None).unwrap();
    let roster = build_roster(loader.entries(), &calendar).unwrap();

    let report = RosterReport::new(&roster, &calendar).unwrap();
    let json = report.to_json().unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["iso_year"], 2026);
    assert_eq!(value["weeks_in_year"], 53);
    assert_eq!(value["ascending"].as_array().unwrap().len(), 6);
    assert_eq!(value["audit_trace"][0]["reasoning"], "$15 x 8 hours x 7 days = $840");

    let parsed: RosterReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_missing_roster_file() {
    match ConfigLoader::load("./config/does_not_exist.yaml") {
        Err(RosterError::ConfigNotFound { path }) => assert!(path.contains("does_not_exist")),
        other => panic!("Expected ConfigNotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_roster_file() {
    let path = std::env::temp_dir().join("payroll_roster_malformed.yaml");
    std::fs::write(&path, "employees: [this is: not: valid").unwrap();

    let result = ConfigLoader::load(&path);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(RosterError::ConfigParseError { .. })));
}

#[test]
fn test_roster_file_with_oversized_hourly_rate() {
    let path = std::env::temp_dir().join("payroll_roster_oversized_rate.yaml");
    std::fs::write(
        &path,
        r#"
calendar:
  year: 2026
employees:
  - id: "1"
    first_name: A
    last_name: A1
    pay:
      type: hourly
      hourly_rate: "79228162514264337593543950335"
      hours_worked: 2
"#,
    )
    .unwrap();

    let loader = ConfigLoader::load(&path);
    let _ = std::fs::remove_file(&path);
    let loader = loader.expect("Failed to load roster");
    let calendar = loader.calendar(None).unwrap();

    match build_roster(loader.entries(), &calendar) {
        Err(RosterError::IncomeOverflow { employee_id }) => assert_eq!(employee_id, "1"),
        other => panic!("Expected IncomeOverflow, got {:?}", other),
    }
}

#[test]
fn test_oversized_commission_sales_is_an_error() {
    let calendar = PayCalendar::for_year(2025).unwrap();
    let result = Employee::base_plus_commission(
        "6",
        "F",
        "F1",
        dec("400"),
        Decimal::MAX,
        dec("2.5"),
        &calendar,
    );
    assert!(matches!(result, Err(RosterError::IncomeOverflow { .. })));
}
