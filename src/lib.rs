//! Weekly income roster for hourly, salaried and commissioned employees.
//!
//! This crate models employees with three pay arrangements, computes each
//! employee's weekly income against an explicit pay calendar and reports the
//! roster ordered by income.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
