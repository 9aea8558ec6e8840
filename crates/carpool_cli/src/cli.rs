use std::path::PathBuf;

use carpool_core::report::ReportFormat;
use carpool_core::{AllocatorConfig, SelectionPolicy};
use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "carpool",
    version,
    about = "Allocate riders to drivers, keeping groups together",
    long_about = "Reads a roster of drivers and riders, seats every group on a single driver\n\
                  where possible, spreads solo riders across the remaining seats, and\n\
                  reports rosters, unassigned riders and summary counters."
)]
pub struct Cli {
    /// Roster file: drivers, a blank line, then riders
    pub input: PathBuf,

    /// Balancing policy for choosing a driver
    #[arg(long, value_enum, env = "CARPOOL_POLICY")]
    pub policy: Option<PolicyArg>,

    /// Ignore drivers' group affinities
    #[arg(long)]
    pub no_affinity: bool,

    /// JSON file with allocator settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Fewest riders first, fill ratio breaks ties
    Balanced,
    /// Lowest fill ratio first, rider count breaks ties
    FillRatio,
    /// First driver with room
    FirstFit,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Balanced => SelectionPolicy::Balanced,
            PolicyArg::FillRatio => SelectionPolicy::FillRatio,
            PolicyArg::FirstFit => SelectionPolicy::FirstFit,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

impl Cli {
    /// Layers command-line flags over `base`.
    pub fn apply_overrides(&self, base: AllocatorConfig) -> AllocatorConfig {
        let mut config = base;
        if let Some(policy) = self.policy {
            config = config.with_policy(policy.into());
        }
        if self.no_affinity {
            config = config.with_affinity(false);
        }
        config
    }

    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
