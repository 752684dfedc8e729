mod logging;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};

use qualitab_assess::{ReportError, assess, write_report};
use qualitab_ingest::{IngestError, LoadOptions, load_csv};
use settings::{ConfigError, ConfigFile};

#[derive(Debug, Error)]
enum CliError {
    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("assessment produced {0} warning(s) in strict mode")]
    StrictWarnings(usize),
}

#[derive(Parser, Debug)]
#[command(name = "qualitab", version, about = "Tabular data quality snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Assess(AssessArgs),
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Delimited input file with a header row.
    input: PathBuf,
    /// Output path for the rendered report.
    #[arg(long, default_value = "report.txt")]
    out: PathBuf,
    /// Field delimiter.
    #[arg(long)]
    delimiter: Option<char>,
    /// Token recognized as a missing value (repeatable; replaces the
    /// default list).
    #[arg(long = "missing-token", value_name = "TOKEN")]
    missing_tokens: Vec<String>,
    /// Optional TOML config file with ingest settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fail when the assessment emits warnings.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Assess(args) => run_assess(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<(), CliError> {
    let started = Instant::now();
    let options = resolve_options(&args)?;

    info!(input = %args.input.display(), "loading table");
    let table = load_csv(&args.input, &options)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "table loaded"
    );

    let assessment = assess(&table);
    for warning in &assessment.warnings {
        warn!(code = %warning.code, column = %warning.path, "{}", warning.message);
    }
    if args.strict && !assessment.warnings.is_empty() {
        return Err(CliError::StrictWarnings(assessment.warnings.len()));
    }

    let report = &assessment.report;
    write_report(&args.out, report)?;

    info!(
        missing = report.missing_values,
        duplicates = report.duplicate_rows,
        out = %args.out.display(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "report written"
    );

    Ok(())
}

/// Defaults, then config file values, then flags.
fn resolve_options(args: &AssessArgs) -> Result<LoadOptions, CliError> {
    let mut options = LoadOptions::default();

    if let Some(path) = &args.config {
        let config = ConfigFile::load(path)?;
        config.apply(&mut options)?;
    }

    if let Some(delimiter) = args.delimiter {
        options.delimiter = delimiter_byte(delimiter)?;
    }
    if !args.missing_tokens.is_empty() {
        options.missing_tokens = args.missing_tokens.clone();
    }

    Ok(options)
}

fn delimiter_byte(delimiter: char) -> Result<u8, CliError> {
    u8::try_from(delimiter).map_err(|_| {
        CliError::InvalidConfig(format!("delimiter '{delimiter}' is not a single byte"))
    })
}
