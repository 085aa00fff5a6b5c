//! Seeds a fresh booking store and verifies it.
//!
//! Prints one PASS/FAIL line per check (or a JSON report) to stdout and exits
//! with status 0 only when every check holds. Logs go to stderr.

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hotel_db_core::verify::{self, Report};
use hotel_db_core::{seed, Database, DbConfig};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Command-line arguments for the verification run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Store dangling foreign keys instead of rejecting them
    #[arg(long)]
    unchecked_references: bool,

    /// Print every table as JSON after seeding
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let db = seeded_database(&args)?;

    if args.dump {
        let dump = db.dump().context("Failed to dump tables")?;
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    let report = verify::verify(&db);
    match args.format {
        Format::Text => println!("{}", report),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(exit_code(&report))
}

/// Maps command-line flags onto the store configuration.
fn config_from_args(args: &Args) -> DbConfig {
    DbConfig {
        enforce_references: !args.unchecked_references,
        ..Default::default()
    }
}

/// Builds a store from the arguments and seeds it. Seeding errors abort the run.
fn seeded_database(args: &Args) -> anyhow::Result<Database> {
    let mut db = Database::with_config(config_from_args(args));
    seed::seed(&mut db).context("Failed to seed database")?;
    Ok(db)
}

/// Exit status 0 only when every check passed.
fn exit_code(report: &Report) -> ExitCode {
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        tracing::error!("{} of {} checks failed", report.failed(), report.outcomes.len());
        ExitCode::FAILURE
    }
}
