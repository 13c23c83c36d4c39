//! CLI argument definitions using clap
//!
//! Commands:
//! - datarow demo
//! - datarow load --config <path> --input <path>
//! - datarow probe-date [--format <pattern>] <sample>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::date_format::DEFAULT_DATE_FORMAT;

/// datarow - typed rows parsed from text
#[derive(Parser, Debug)]
#[command(name = "datarow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ingest a built-in sample with some malformed rows and print the result
    Demo,

    /// Ingest a comma-separated file using a JSON table definition
    Load {
        /// Path to table definition
        #[arg(long, default_value = "./table.json")]
        config: PathBuf,

        /// Path to input data, one row per line; empty lines are skipped,
        /// whitespace-only lines are rows
        #[arg(long)]
        input: PathBuf,
    },

    /// Check how a sample parses against a date format
    ProbeDate {
        /// strftime pattern
        #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
        format: String,

        /// Text to parse
        sample: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
