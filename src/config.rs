//! On-disk table definition
//!
//! ```json
//! {
//!   "date_format": "%d-%m-%Y %H:%M:%S",
//!   "fail_fast": false,
//!   "columns": [
//!     { "name": "created_at", "type": "date" },
//!     { "name": "cost", "type": "number" }
//!   ]
//! }
//! ```
//!
//! `date_format` and `fail_fast` are optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::date_format::DateFormat;
use crate::field::FieldDef;
use crate::table::{ErrorPolicy, Table};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Schema, error policy and date format of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// strftime pattern for date columns
    #[serde(default)]
    pub date_format: DateFormat,

    /// Return cell failures instead of collecting them (default false)
    #[serde(default)]
    pub fail_fast: bool,

    /// Columns in order (required, non-empty)
    pub columns: Vec<FieldDef>,
}

impl TableConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), columns = config.columns.len(), "config loaded");
        Ok(config)
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: TableConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.date_format.pattern().trim().is_empty() {
            return Err(ConfigError::Invalid("date_format must not be empty".into()));
        }

        if self.columns.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one column is required".into(),
            ));
        }

        Ok(())
    }

    pub fn policy(&self) -> ErrorPolicy {
        ErrorPolicy::from_fail_fast(self.fail_fast)
    }

    /// Builds an empty table with this schema.
    pub fn build(&self) -> Table {
        let mut table = Table::new(self.policy()).with_date_format(self.date_format.clone());
        for def in &self.columns {
            table.add_field(def.clone());
        }
        table
    }
}
