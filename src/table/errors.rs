//! Table error types
//!
//! Error codes:
//! - DATAROW_ARITY (always returned to the caller, never logged)
//! - DATAROW_ROW_PARSE (returned in fail-fast mode, logged in collect mode)

use std::fmt;

use thiserror::Error;

use crate::field::FieldError;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// One cell of a row that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column {column} ({name}): {source}")]
pub struct ColumnError {
    /// Zero-based column position
    pub column: usize,
    /// Column name from the schema
    pub name: String,
    #[source]
    pub source: FieldError,
}

/// Every cell failure of a single ingestion call, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseErrors(Vec<ColumnError>);

impl ParseErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ColumnError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnError> {
        self.0.iter()
    }

    /// `Ok` when nothing failed.
    pub fn into_result(self) -> Result<(), ParseErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ColumnError;
    type IntoIter = std::slice::Iter<'a, ColumnError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse failures tagged with the index of the row they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{row}]-{errors}")]
pub struct RowError {
    /// Zero-based index of the committed row
    pub row: usize,
    pub errors: ParseErrors,
}

/// Errors returned from `Table::set`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// More values than schema columns; no row was created
    #[error("length of schema [{columns}] does not match the amount of values [{values}]")]
    Arity { columns: usize, values: usize },

    /// Row committed, but some cells failed (fail-fast mode only)
    #[error(transparent)]
    Row(#[from] RowError),
}

impl TableError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TableError::Arity { .. } => "DATAROW_ARITY",
            TableError::Row(_) => "DATAROW_ROW_PARSE",
        }
    }

    /// Index of the committed row, if one was committed
    pub fn row(&self) -> Option<usize> {
        match self {
            TableError::Arity { .. } => None,
            TableError::Row(err) => Some(err.row),
        }
    }
}
