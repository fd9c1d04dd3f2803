//! CLI module for infercast
//!
//! Provides command-line interface for:
//! - types: List the type catalog
//! - check: Validate a schema definition
//! - infer: Infer the type of a JSON array
//! - convert: Convert a JSON table against a schema

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, convert, infer, run, run_command, types};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_input, read_input, write_error, write_response};
