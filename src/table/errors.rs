//! Table construction errors

use thiserror::Error;

/// Result type for table construction
pub type TableResult<T> = Result<T, TableError>;

/// Structural problems with a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two columns share a name
    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Columns differ in length
    #[error("column '{column}' has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
