//! Schema error types
//!
//! Error codes:
//! - SCHEMA_ARGUMENTS_REQUIRED
//! - SCHEMA_UNKNOWN_TYPE
//! - SCHEMA_LENGTH_MISMATCH
//! - SCHEMA_COLUMN_COUNT_MISMATCH
//! - SCHEMA_COLUMNS_NOT_IDENTICAL
//! - SCHEMA_MALFORMED
//!
//! Every schema error is raised at the point of violation and surfaced to the
//! caller. None are recovered internally.

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Type directives or column names missing
    ArgumentsRequired,
    /// Directive is neither a registered type nor "infer"
    UnknownType,
    /// Directive and column lists differ in length
    LengthMismatch,
    /// Table and schema have different numbers of columns
    ColumnCountMismatch,
    /// Table columns differ from schema columns in name or order
    ColumnsNotIdentical,
    /// Schema definition could not be read or parsed
    Malformed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::ArgumentsRequired => "SCHEMA_ARGUMENTS_REQUIRED",
            SchemaErrorCode::UnknownType => "SCHEMA_UNKNOWN_TYPE",
            SchemaErrorCode::LengthMismatch => "SCHEMA_LENGTH_MISMATCH",
            SchemaErrorCode::ColumnCountMismatch => "SCHEMA_COLUMN_COUNT_MISMATCH",
            SchemaErrorCode::ColumnsNotIdentical => "SCHEMA_COLUMNS_NOT_IDENTICAL",
            SchemaErrorCode::Malformed => "SCHEMA_MALFORMED",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Malformed schema, or a schema that does not fit the table it is applied to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaArgumentError {
    code: SchemaErrorCode,
    message: String,
    /// Offending directive, if any
    directive: Option<String>,
}

impl SchemaArgumentError {
    /// Type directives or column names were not supplied
    pub fn arguments_required() -> Self {
        Self {
            code: SchemaErrorCode::ArgumentsRequired,
            message: "type directives and columns are required".into(),
            directive: None,
        }
    }

    /// A directive is not a registered type name and not "infer"
    pub fn unknown_type(directive: impl Into<String>, registered: &[&str]) -> Self {
        let directive = directive.into();
        Self {
            code: SchemaErrorCode::UnknownType,
            message: format!(
                "'{}' is not a valid type; expected 'infer' or one of: {}",
                directive,
                registered.join(", ")
            ),
            directive: Some(directive),
        }
    }

    /// Directive and column counts differ
    pub fn length_mismatch(types: usize, columns: usize) -> Self {
        Self {
            code: SchemaErrorCode::LengthMismatch,
            message: format!(
                "number of types ({}) does not match number of columns ({})",
                types, columns
            ),
            directive: None,
        }
    }

    /// Table and schema column counts differ
    pub fn column_count_mismatch(table: usize, schema: usize) -> Self {
        Self {
            code: SchemaErrorCode::ColumnCountMismatch,
            message: format!(
                "column count mismatch: table has {}, schema has {}",
                table, schema
            ),
            directive: None,
        }
    }

    /// Table and schema columns differ by name or order
    pub fn columns_not_identical(table: &[String], schema: &[String]) -> Self {
        Self {
            code: SchemaErrorCode::ColumnsNotIdentical,
            message: format!(
                "columns are not identical: table {:?}, schema {:?}",
                table, schema
            ),
            directive: None,
        }
    }

    /// Schema definition could not be read or parsed
    pub fn malformed(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::Malformed,
            message: format!(
                "malformed schema definition '{}': {}",
                source.into(),
                reason.into()
            ),
            directive: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending directive if applicable
    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }
}

impl fmt::Display for SchemaArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaArgumentError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaArgumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::ArgumentsRequired.code(), "SCHEMA_ARGUMENTS_REQUIRED");
        assert_eq!(SchemaErrorCode::UnknownType.code(), "SCHEMA_UNKNOWN_TYPE");
        assert_eq!(SchemaErrorCode::LengthMismatch.code(), "SCHEMA_LENGTH_MISMATCH");
        assert_eq!(
            SchemaErrorCode::ColumnCountMismatch.code(),
            "SCHEMA_COLUMN_COUNT_MISMATCH"
        );
        assert_eq!(
            SchemaErrorCode::ColumnsNotIdentical.code(),
            "SCHEMA_COLUMNS_NOT_IDENTICAL"
        );
        assert_eq!(SchemaErrorCode::Malformed.code(), "SCHEMA_MALFORMED");
    }

    #[test]
    fn test_unknown_type_names_directive() {
        let err = SchemaArgumentError::unknown_type("decimal", &["str", "int"]);
        assert_eq!(err.directive(), Some("decimal"));
        let display = format!("{}", err);
        assert!(display.contains("SCHEMA_UNKNOWN_TYPE"));
        assert!(display.contains("decimal"));
        assert!(display.contains("str, int"));
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = SchemaArgumentError::length_mismatch(2, 3);
        assert!(err.message().contains("(2)"));
        assert!(err.message().contains("(3)"));
    }
}
