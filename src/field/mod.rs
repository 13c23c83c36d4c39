//! Field subsystem
//!
//! Column definitions and the typed cells that fill them. A cell knows how to
//! render itself and how to parse itself from text; the variant set is closed.

mod errors;
mod types;
mod value;

pub use errors::{DateParseError, FieldError, FieldResult, NumberParseError};
pub use types::{FieldDef, FieldType};
pub use value::Field;
