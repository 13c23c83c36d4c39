//! Field parse errors
//!
//! Error codes:
//! - DATAROW_INVALID_NUMBER
//! - DATAROW_INVALID_DATE

use std::num::ParseFloatError;

use thiserror::Error;

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;

/// Why a number cell was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberParseError {
    #[error(transparent)]
    Syntax(#[from] ParseFloatError),

    /// Finite literal too large for an `f64`
    #[error("value out of range")]
    OutOfRange,
}

/// Why a date cell was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error(transparent)]
    Chrono(#[from] chrono::ParseError),

    /// Parsed, but the input is not exactly what the pattern renders
    #[error("input does not match the pattern exactly, expected {expected:?}")]
    NotExact { expected: String },

    #[error("leap seconds are not supported")]
    LeapSecond,
}

/// A single cell value that could not be converted to its column type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Input is not a decimal or floating-point literal
    #[error("invalid number {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: NumberParseError,
    },

    /// Input does not match the configured date pattern
    #[error("cannot parse {input:?} as date with format {pattern:?}: {source}")]
    InvalidDate {
        input: String,
        pattern: String,
        #[source]
        source: DateParseError,
    },
}

impl FieldError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::InvalidNumber { .. } => "DATAROW_INVALID_NUMBER",
            FieldError::InvalidDate { .. } => "DATAROW_INVALID_DATE",
        }
    }

    /// Returns the offending input text
    pub fn input(&self) -> &str {
        match self {
            FieldError::InvalidNumber { input, .. } | FieldError::InvalidDate { input, .. } => {
                input
            }
        }
    }
}
