//! The table aggregate: schema, committed rows, collected errors and the
//! policy that decides between the last two.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::{ColumnError, ParseErrors, RowError, TableError, TableResult};
use super::row::Row;
use crate::date_format::DateFormat;
use crate::field::{FieldDef, FieldType};

/// What `Table::set` does with cell parse failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Return the failure to the caller
    FailFast,
    /// Append the failure to the table's error log
    #[default]
    Collect,
}

impl ErrorPolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            ErrorPolicy::FailFast
        } else {
            ErrorPolicy::Collect
        }
    }

    pub fn is_fail_fast(&self) -> bool {
        *self == ErrorPolicy::FailFast
    }
}

/// Typed rows parsed from text.
///
/// A table is a monotonic accumulator: columns and rows are only ever
/// appended, and so are collected errors. It is not synchronized; share it
/// across threads behind a lock.
#[derive(Debug, Clone, Default)]
pub struct Table {
    schema: Vec<FieldDef>,
    rows: Vec<Row>,
    errors: Vec<RowError>,
    policy: ErrorPolicy,
    date_format: DateFormat,
}

impl Table {
    /// Creates an empty table using the default date format.
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<DateFormat>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Replaces the pattern used for date cells ingested from now on.
    ///
    /// Rows already committed keep their parsed values.
    pub fn set_date_format(&mut self, date_format: impl Into<DateFormat>) {
        self.date_format = date_format.into();
        debug!(pattern = %self.date_format, "date format changed");
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Appends a column to the schema. Names are not checked for uniqueness.
    pub fn add_column(&mut self, field_type: FieldType, name: impl Into<String>) {
        self.add_field(FieldDef::new(field_type, name));
    }

    pub fn add_field(&mut self, def: FieldDef) {
        if !self.rows.is_empty() {
            warn!(
                column = %def.name,
                rows = self.rows.len(),
                "column added after rows were committed; existing rows keep their width"
            );
        }
        debug!(column = %def.name, field_type = %def.field_type, "column added");
        self.schema.push(def);
    }

    /// Parses one row of raw values and commits it.
    ///
    /// Values map to columns by position. Columns past the end of `values`
    /// keep their default value and are not reported. Every value is
    /// attempted even after a failure, and the row is committed whether or
    /// not any cell failed:
    ///
    /// - more values than columns: `TableError::Arity`, nothing committed,
    ///   nothing logged, regardless of policy
    /// - cell failures under `FailFast`: `TableError::Row` naming the row
    ///   that was just committed
    /// - cell failures under `Collect`: `Ok(())`, the failure is appended to
    ///   `errors()`
    pub fn set<S: AsRef<str>>(&mut self, values: &[S]) -> TableResult<()> {
        if values.len() > self.schema.len() {
            warn!(
                columns = self.schema.len(),
                values = values.len(),
                "too many values for schema"
            );
            return Err(TableError::Arity {
                columns: self.schema.len(),
                values: values.len(),
            });
        }

        let mut row = Row::for_schema(&self.schema);
        let mut failures = ParseErrors::new();
        for (column, (field, raw)) in row.fields_mut().iter_mut().zip(values).enumerate() {
            if let Err(source) = field.parse(raw.as_ref(), &self.date_format) {
                failures.push(ColumnError {
                    column,
                    name: self.schema[column].name.clone(),
                    source,
                });
            }
        }

        let index = self.rows.len();
        self.rows.push(row);
        debug!(row = index, "row committed");

        let Err(errors) = failures.into_result() else {
            return Ok(());
        };
        warn!(row = index, failures = errors.len(), policy = ?self.policy, "row parsed with errors");
        let error = RowError { row: index, errors };
        match self.policy {
            ErrorPolicy::FailFast => Err(error.into()),
            ErrorPolicy::Collect => {
                self.errors.push(error);
                Ok(())
            }
        }
    }

    pub fn schema(&self) -> &[FieldDef] {
        &self.schema
    }

    /// Position of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.iter().position(|def| def.name == name)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of committed rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Errors collected in `Collect` mode, in the order they occurred
    pub fn errors(&self) -> &[RowError] {
        &self.errors
    }

    /// One line per collected error.
    pub fn render_errors(&self) -> String {
        self.errors.iter().map(|err| format!("{err}\n")).collect()
    }
}

/// One line per row: `index, cell, cell, ...`
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            writeln!(f, "{index}, {row}")?;
        }
        Ok(())
    }
}
