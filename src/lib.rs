//! infercast - schema-driven column type validation and coercion
//!
//! A [`schema::Schema`] pairs column names with type directives drawn from a
//! [`types::TypeRegistry`]. A [`convert::ConversionEngine`] applies it to a
//! [`table::Table`], casting declared columns and inferring the rest with
//! [`infer::TypeInferrer`].

pub mod cli;
pub mod config;
pub mod convert;
pub mod infer;
pub mod observability;
pub mod schema;
pub mod table;
pub mod types;
