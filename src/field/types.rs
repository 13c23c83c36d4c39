//! Column type definitions
//!
//! Supported types:
//! - date: timestamp parsed with the table's date format
//! - category: free-form string
//! - number: 64-bit floating point

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of scalar column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Timestamp
    Date,
    /// UTF-8 string, any input accepted
    Category,
    /// 64-bit floating point
    Number,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Date => "date",
            FieldType::Category => "category",
            FieldType::Number => "number",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// One column of a table schema.
///
/// Immutable once added to a table. Columns are addressed by position during
/// ingestion, so duplicate names are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Column name
    pub name: String,
    /// Column data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDef {
    /// Create a column definition
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Create a date column
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(FieldType::Date, name)
    }

    /// Create a category column
    pub fn category(name: impl Into<String>) -> Self {
        Self::new(FieldType::Category, name)
    }

    /// Create a number column
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(FieldType::Number, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Date.type_name(), "date");
        assert_eq!(FieldType::Category.type_name(), "category");
        assert_eq!(FieldType::Number.type_name(), "number");
        assert_eq!(FieldType::Number.to_string(), "number");
    }

    #[test]
    fn test_field_def_constructors() {
        assert_eq!(FieldDef::date("created_at").field_type, FieldType::Date);
        assert_eq!(FieldDef::category("kind").field_type, FieldType::Category);
        let cost = FieldDef::number("cost");
        assert_eq!(cost.field_type, FieldType::Number);
        assert_eq!(cost.name, "cost");
    }

    #[test]
    fn test_field_def_json_shape() {
        let def: FieldDef =
            serde_json::from_str(r#"{"name": "cost", "type": "number"}"#).unwrap();
        assert_eq!(def, FieldDef::number("cost"));

        let json = serde_json::to_string(&FieldDef::date("created_at")).unwrap();
        assert_eq!(json, r#"{"name":"created_at","type":"date"}"#);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<FieldDef, _> =
            serde_json::from_str(r#"{"name": "x", "type": "bool"}"#);
        assert!(result.is_err());
    }
}
