//! Text I/O for the CLI
//!
//! - Input: one row per line, values separated by `,`, empty lines skipped
//! - Output: the table, a blank line, then the error log, on stdout

use std::io::{self, BufRead, Write};

use crate::table::Table;

use super::errors::{CliError, CliResult};

/// A parsed input line with its 1-based line number.
pub type Record = (usize, Vec<String>);

/// Read comma-separated records from `reader`.
///
/// Values are taken verbatim; no quoting or trimming. Only lines with no
/// characters at all are skipped, so a whitespace-only line is a row with one
/// whitespace value.
pub fn read_records<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<Record>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) if line.is_empty() => None,
            Ok(line) => {
                let values = line.split(',').map(str::to_string).collect::<Vec<_>>();
                Some(Ok((i + 1, values)))
            }
            Err(e) => Some(Err(CliError::from(e))),
        })
}

/// Write the table followed by its error log
pub fn write_report<W: Write>(table: &Table, writer: &mut W) -> CliResult<()> {
    writeln!(writer, "{table}")?;
    write!(writer, "{}", table.render_errors())?;
    writer.flush()?;
    Ok(())
}

/// Write the report to stdout
pub fn print_report(table: &Table) -> CliResult<()> {
    let stdout = io::stdout();
    write_report(table, &mut stdout.lock())
}
