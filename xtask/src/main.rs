use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the carpool workspace",
    long_about = "Runs the allocator on a roster, the bundled example,\n\
                  benchmarks, and CI checks for the carpool workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a roster file with the carpool CLI
    Run {
        /// Roster file to allocate
        #[arg(default_value = "crates/carpool_cli/tests/fixtures/roster.txt")]
        input: String,
        /// Extra arguments passed through to carpool
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Run the built-in example roster
    Example,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, example, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the example
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .unwrap_or_else(|err| {
            eprintln!("failed to execute cargo: {err}");
            exit(1)
        })
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test carpool_core");
    run_cargo(&["test", "-p", "carpool_core"]);

    step("Test carpool_cli");
    run_cargo(&["test", "-p", "carpool_cli"]);
}

fn ci_examples() {
    step("Run allocate_roster example");
    run_cargo(&["run", "-p", "carpool_core", "--example", "allocate_roster"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "carpool_core", "--bench", "allocation"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, args } => {
            let mut cargo_args = vec!["run", "-p", "carpool_cli", "--", input.as_str()];
            cargo_args.extend(args.iter().map(String::as_str));
            run_cargo(&cargo_args);
        }
        Commands::Example => ci_examples(),
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Examples => ci_examples(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_examples();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
