//! `boundcheck` — check JSON instances against numeric-range schemas, or run
//! declarative conformance fixtures against the validator.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use boundcheck_core::fixture::{load_groups, run_groups};
use boundcheck_core::{validate, RangeSchema};

#[derive(Parser)]
#[command(name = "boundcheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate instance files against a range schema.
    Check {
        /// Path to the schema JSON (an object with maximum/minimum keywords).
        #[arg(long)]
        schema: PathBuf,
        /// Instance files to validate, one JSON value per file.
        #[arg(required = true)]
        instances: Vec<PathBuf>,
    },
    /// Run conformance fixture files and report per-case mismatches.
    Suite {
        /// Fixture files (JSON arrays of schema/tests groups).
        #[arg(required = true)]
        fixtures: Vec<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { schema, instances } => check(&schema, &instances),
        Command::Suite { fixtures } => suite(&fixtures),
    }
}

fn read_json(path: &PathBuf) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn check(schema_path: &PathBuf, instance_paths: &[PathBuf]) -> Result<ExitCode> {
    let raw_schema = read_json(schema_path)?;
    let schema = RangeSchema::compile(&raw_schema)
        .with_context(|| format!("invalid schema in {}", schema_path.display()))?;
    info!(schema = %schema_path.display(), instances = instance_paths.len(), "checking");

    let mut all_valid = true;
    for path in instance_paths {
        let instance = read_json(path)?;
        let valid = validate(&schema, &instance);
        all_valid &= valid;
        println!(
            "{}: {}",
            path.display(),
            if valid { "valid" } else { "invalid" }
        );
    }
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn suite(fixture_paths: &[PathBuf]) -> Result<ExitCode> {
    let mut total = 0usize;
    let mut mismatched = 0usize;

    for path in fixture_paths {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let groups =
            load_groups(&raw).with_context(|| format!("invalid fixture in {}", path.display()))?;
        total += groups.iter().map(|g| g.tests.len()).sum::<usize>();

        let failures = run_groups(&groups)
            .with_context(|| format!("malformed group schema in {}", path.display()))?;
        for failure in &failures {
            println!("MISMATCH [{}] {failure}", path.display());
        }
        mismatched += failures.len();
    }

    println!("{} ok | {mismatched} mismatched | {total} total", total - mismatched);
    Ok(if mismatched == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
