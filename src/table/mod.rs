//! In-memory tables
//!
//! A [`Table`] is an ordered set of uniquely named, equal-length columns.
//! The conversion engine only talks to tables through the [`Frame`] trait,
//! so any dataframe-like structure can be converted.

mod column;
mod errors;
mod value;

pub use column::{Column, ColumnView};
pub use errors::{TableError, TableResult};
pub use value::Value;

use serde::{Deserialize, Serialize};

use crate::convert::{ConversionError, ConversionResult};
use crate::types::ConcreteType;

/// What the conversion engine needs from a table.
pub trait Frame {
    /// Column names in table order
    fn column_names(&self) -> Vec<String>;

    /// Values and storage type of a column
    fn column(&self, name: &str) -> Option<ColumnView<'_>>;

    /// Re-stores a column as `dtype`.
    ///
    /// Implementations must leave the column untouched when the cast fails.
    fn set_column_type(&mut self, name: &str, dtype: ConcreteType) -> ConversionResult<()>;
}

/// An ordered collection of named columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableDef")]
pub struct Table {
    columns: Vec<Column>,
}

#[derive(Debug, Deserialize)]
struct TableDef {
    columns: Vec<Column>,
}

impl TryFrom<TableDef> for Table {
    type Error = TableError;

    fn try_from(def: TableDef) -> Result<Self, Self::Error> {
        Table::new(def.columns)
    }
}

impl Table {
    /// Builds a table, checking that names are unique and lengths agree.
    pub fn new(columns: Vec<Column>) -> TableResult<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for (i, col) in columns.iter().enumerate() {
                if columns[..i].iter().any(|c| c.name() == col.name()) {
                    return Err(TableError::DuplicateColumn(col.name().to_string()));
                }
                if col.len() != expected {
                    return Err(TableError::LengthMismatch {
                        column: col.name().to_string(),
                        expected,
                        actual: col.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Columns in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a column by name
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }
}

impl Frame for Table {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    fn column(&self, name: &str) -> Option<ColumnView<'_>> {
        self.get(name).map(Column::view)
    }

    fn set_column_type(&mut self, name: &str, dtype: ConcreteType) -> ConversionResult<()> {
        let column = self.get_mut(name).ok_or_else(|| ConversionError::MissingColumn {
            column: name.to_string(),
        })?;
        column.cast(dtype)
    }
}
