//! Conversion errors

use thiserror::Error;

use crate::schema::SchemaArgumentError;
use crate::types::{ConcreteType, UnknownTypeError};

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Everything that can stop a conversion.
///
/// All variants propagate to the caller as soon as they are detected.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Schema malformed or not aligned with the table
    #[error(transparent)]
    Schema(#[from] SchemaArgumentError),

    /// A type name failed to resolve
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),

    /// A value cannot be stored in the target representation
    #[error("column '{column}': value {value} at row {row} cannot be converted to {target}")]
    NotRepresentable {
        column: String,
        row: usize,
        value: String,
        target: ConcreteType,
    },

    /// Inference found no registered type for the column
    #[error("column '{column}': no registered type could be inferred")]
    InferenceFailed { column: String },

    /// The table has no column with this name
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },
}

impl ConversionError {
    /// Short error code for CLI output
    pub fn code(&self) -> &'static str {
        match self {
            ConversionError::Schema(e) => e.code().code(),
            ConversionError::UnknownType(_) => "UNKNOWN_TYPE",
            ConversionError::NotRepresentable { .. } => "CONVERSION_FAILED",
            ConversionError::InferenceFailed { .. } => "INFERENCE_FAILED",
            ConversionError::MissingColumn { .. } => "MISSING_COLUMN",
        }
    }

    /// The column the error occurred in, if any
    pub fn column(&self) -> Option<&str> {
        match self {
            ConversionError::NotRepresentable { column, .. }
            | ConversionError::InferenceFailed { column }
            | ConversionError::MissingColumn { column } => Some(column),
            _ => None,
        }
    }
}
