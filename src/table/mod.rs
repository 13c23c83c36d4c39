//! Table subsystem
//!
//! A table owns an ordered column schema and ingests rows of raw strings,
//! parsing each value into the typed cell of its column.
//!
//! # Failure semantics
//!
//! - Too many values abort the call; nothing is committed.
//! - Otherwise the row is always committed, even when cells fail.
//! - Cell failures of one call are combined, never short-circuited.
//! - `ErrorPolicy` decides whether they are returned or logged.

mod errors;
mod row;
#[allow(clippy::module_inception)]
mod table;

pub use errors::{ColumnError, ParseErrors, RowError, TableError, TableResult};
pub use row::Row;
pub use table::{ErrorPolicy, Table};
