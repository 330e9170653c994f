use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "payroll-roster")]
#[command(about = "Report employees ordered by weekly income.")]
pub struct CommandLine {
    /// Roster YAML file. Uses the built-in reference roster when omitted
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
    /// ISO week-year for salaried incomes. Overrides the roster file
    #[arg(short, long)]
    pub year: Option<i32>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two-section text report
    Text,
    /// Structured JSON report with audit trace
    Json,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
