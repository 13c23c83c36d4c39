//! CLI module for datarow
//!
//! Provides command-line interface for:
//! - demo: Ingest a built-in sample and print the table and error log
//! - load: Ingest a comma-separated file described by a JSON table definition
//! - probe-date: Check a sample against a date format

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{demo, load, probe_date, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{print_report, read_records, write_report, Record};
