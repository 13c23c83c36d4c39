//! CLI command implementations

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TableConfig;
use crate::date_format::DateFormat;
use crate::field::FieldType;
use crate::table::{ErrorPolicy, Table};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{print_report, read_records};

/// Rows fed to the demo table; the second and fourth are malformed.
const DEMO_ROWS: [[&str; 3]; 5] = [
    ["15-07-1990 10:22:04", "Hobs", "1.35"],
    ["23-12-2024X23:59:04", "", "123341.35"],
    ["15-07-1990 10:22:04", "Hobs", "2.67"],
    ["23-12-2024 23:59:04", "Horno", "123341;35"],
    ["15-07-2023 10:22:04", "Hobs", "8.88"],
];

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Demo => demo(),
        Command::Load { config, input } => load(&config, &input),
        Command::ProbeDate { format, sample } => {
            println!("{}", probe_date(&format, &sample));
            Ok(())
        }
    }
}

/// Build the sample table in collect mode and print it with its errors
pub fn demo() -> CliResult<()> {
    let table = demo_table()?;
    print_report(&table)
}

pub(crate) fn demo_table() -> CliResult<Table> {
    let mut table = Table::new(ErrorPolicy::Collect);
    table.add_column(FieldType::Date, "created_at");
    table.add_column(FieldType::Category, "product_category");
    table.add_column(FieldType::Number, "cost");

    for (i, row) in DEMO_ROWS.iter().enumerate() {
        table
            .set(&row[..])
            .map_err(|e| CliError::ingest_failed(i + 1, &e))?;
    }
    Ok(table)
}

/// Ingest a comma-separated file into a table described by `config_path`.
///
/// Any error returned by the table ends the run: cell failures in fail-fast
/// mode, and too-wide rows in either mode.
pub fn load(config_path: &Path, input_path: &Path) -> CliResult<()> {
    let config = TableConfig::load(config_path)?;
    let input = File::open(input_path).map_err(|e| {
        CliError::io_error(format!("Failed to open input {:?}: {}", input_path, e))
    })?;
    let table = ingest(config.build(), BufReader::new(input))?;
    info!(
        rows = table.len(),
        errors = table.errors().len(),
        "input ingested"
    );
    print_report(&table)
}

pub(crate) fn ingest<R: std::io::BufRead>(mut table: Table, reader: R) -> CliResult<Table> {
    for record in read_records(reader) {
        let (line, values) = record?;
        table
            .set(&values)
            .map_err(|e| CliError::ingest_failed(line, &e))?;
    }
    Ok(table)
}

/// Parse `sample` with `pattern` and report the outcome as text
pub fn probe_date(pattern: &str, sample: &str) -> String {
    DateFormat::new(pattern).probe(sample)
}
