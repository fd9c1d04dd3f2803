//! Schema-driven column conversion
//!
//! [`ConversionEngine`] walks a schema against a table and brings every
//! column's storage type in line with its directive. [`cast_values`] is the
//! value-level primitive it delegates to through the table.

mod cast;
mod engine;
mod errors;
mod report;

pub use cast::cast_values;
pub use engine::ConversionEngine;
pub use errors::{ConversionError, ConversionResult};
pub use report::{ColumnAction, ColumnOutcome, ConversionReport};
