//! Schema subsystem for infercast
//!
//! A schema declares, once, how each column of an expected table is typed.
//!
//! # Design Principles
//!
//! - Validated at construction, never lazily
//! - Immutable after construction
//! - Declaration order is significant: columns are matched positionally
//! - Directives are checked against an injected `TypeRegistry`

mod errors;
mod loader;
mod types;
mod validator;

pub use errors::{SchemaArgumentError, SchemaErrorCode, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{Directive, Schema, SchemaDefinition};
pub use validator::TableValidator;
