//! Type catalog for infercast
//!
//! The catalog is closed: every logical type name a schema may declare is a
//! variant of [`LogicalType`], and every variant maps to exactly one storage
//! representation ([`ConcreteType`]).
//!
//! A [`TypeRegistry`] is built once and handed to the schema and the
//! conversion engine by reference. It is never mutated after construction.

mod errors;
mod logical;
mod registry;

pub use errors::{TypeResult, UnknownTypeError};
pub use logical::{ConcreteType, LogicalType, INFER_DIRECTIVE};
pub use registry::TypeRegistry;
