//! Table/schema alignment checks
//!
//! Before any column is touched, the table must line up with the schema:
//! - same number of columns
//! - same names in the same order
//!
//! Both checks fail with `SchemaArgumentError`. The validator never mutates
//! the table.

use crate::table::Frame;

use super::errors::{SchemaArgumentError, SchemaResult};
use super::types::Schema;

/// Checks that a table's columns match a schema exactly.
pub struct TableValidator<'a> {
    schema: &'a Schema,
}

impl<'a> TableValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates column count, then column names and order.
    ///
    /// # Errors
    ///
    /// - SCHEMA_COLUMN_COUNT_MISMATCH if the counts differ
    /// - SCHEMA_COLUMNS_NOT_IDENTICAL if names or order differ
    pub fn validate<T: Frame + ?Sized>(&self, table: &T) -> SchemaResult<()> {
        let table_columns = table.column_names();
        let schema_columns = self.schema.columns();

        if table_columns.len() != schema_columns.len() {
            return Err(SchemaArgumentError::column_count_mismatch(
                table_columns.len(),
                schema_columns.len(),
            ));
        }

        if table_columns != schema_columns {
            return Err(SchemaArgumentError::columns_not_identical(
                &table_columns,
                &schema_columns,
            ));
        }

        Ok(())
    }
}
