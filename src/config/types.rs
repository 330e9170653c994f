//! Configuration types for roster files.
//!
//! This module contains the strongly-typed structures deserialized from a
//! roster YAML file.

use serde::{Deserialize, Serialize};

use crate::models::RosterEntry;

/// Calendar section of a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// The ISO week-year incomes are computed for.
    pub year: i32,
}

/// A complete roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Optional fixed calendar. When absent the current date is used.
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
    /// The employees to build, in roster order.
    #[serde(default)]
    pub employees: Vec<RosterEntry>,
}
