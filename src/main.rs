mod cli;

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{CommandLine, OutputFormat};
use payroll_roster::config::ConfigLoader;
use payroll_roster::report::{RosterReport, build_roster, write_report};

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse_args();

    init_logging();

    let loader = match &args.roster {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => ConfigLoader::reference(),
    };

    // Derived once; every salaried income in this run uses the same year.
    let calendar = loader.calendar(args.year)?;
    info!(
        iso_year = calendar.iso_year(),
        weeks_in_year = calendar.weeks_in_year(),
        "Using pay calendar"
    );

    let roster = build_roster(loader.entries(), &calendar)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => write_report(&roster, &mut out)?,
        OutputFormat::Json => {
            let json = RosterReport::new(&roster, &calendar)?.to_json()?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;

    Ok(())
}

// Logs go to stderr so the report on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
