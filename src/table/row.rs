use std::fmt;
use std::ops::Index;

use crate::field::{Field, FieldDef};

/// One ingested record, one cell per schema column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(Vec<Field>);

impl Row {
    /// Builds a row of default cells matching `schema`.
    pub(crate) fn for_schema(schema: &[FieldDef]) -> Self {
        Self(schema.iter().map(|def| Field::new(def.field_type)).collect())
    }

    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    pub fn get(&self, column: usize) -> Option<&Field> {
        self.0.get(column)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.0
    }
}

impl Index<usize> for Row {
    type Output = Field;

    fn index(&self, column: usize) -> &Field {
        &self.0[column]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
