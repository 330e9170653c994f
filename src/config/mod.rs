//! Roster configuration for the payroll roster.
//!
//! This module loads rosters from YAML files and provides the built-in
//! reference roster used when no file is given.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/roster.yaml").unwrap();
//! println!("Loaded {} employees", loader.entries().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, reference_roster};
pub use types::{CalendarConfig, RosterConfig};
