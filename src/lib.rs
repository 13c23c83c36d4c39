//! datarow - a minimal typed tabular container
//!
//! Columns are typed (date, category, number). Rows arrive as raw strings
//! and are parsed cell by cell; parse failures of a row are combined and
//! either returned or collected, depending on the table's error policy.
//!
//! ```
//! use datarow::{ErrorPolicy, FieldType, Table};
//!
//! let mut table = Table::new(ErrorPolicy::Collect);
//! table.add_column(FieldType::Date, "created_at");
//! table.add_column(FieldType::Category, "product_category");
//! table.add_column(FieldType::Number, "cost");
//!
//! table.set(&["15-07-1990 10:22:04", "Hobs", "1.35"]).unwrap();
//! table.set(&["23-12-2024X23:59:04", "", "123341.35"]).unwrap();
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.errors().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod date_format;
pub mod field;
pub mod table;

pub use config::TableConfig;
pub use date_format::DateFormat;
pub use field::{Field, FieldDef, FieldError, FieldType};
pub use table::{ErrorPolicy, Row, RowError, Table, TableError};
