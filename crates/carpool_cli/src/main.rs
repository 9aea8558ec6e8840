mod cli;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use carpool_core::input::load_roster;
use carpool_core::report::write_report;
use carpool_core::{AllocationSummary, Allocator, AllocatorConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let base = match &cli.config {
        Some(path) => AllocatorConfig::from_json_file(path)?,
        None => AllocatorConfig::default(),
    };
    let config = cli.apply_overrides(base);

    let roster = load_roster(&cli.input)?;
    let result = Allocator::new(config).run(roster.drivers, &roster.riders);

    let summary = AllocationSummary::from_result(&result);
    info!(
        assigned = summary.assigned_riders,
        unassigned = summary.unassigned_riders,
        empty_seats = summary.empty_seats,
        "allocation complete"
    );

    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("cannot create report file {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_report(&result, cli.format.into(), writer)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.default_log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
