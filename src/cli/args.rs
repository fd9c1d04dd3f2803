//! CLI argument definitions using clap
//!
//! Commands:
//! - infercast types [--config <path>]
//! - infercast check --schema <path> [--config <path>]
//! - infercast infer [--config <path>]
//! - infercast convert --schema <path> [--config <path>] [--verbose]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// infercast - schema-driven column type validation and coercion
#[derive(Parser, Debug)]
#[command(name = "infercast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the type catalog
    Types {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load and validate a schema definition
    Check {
        /// Path to schema definition
        #[arg(long)]
        schema: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Infer the type of a JSON array read from stdin
    Infer {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Convert a table read from stdin against a schema
    Convert {
        /// Path to schema definition
        #[arg(long)]
        schema: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Trace each column to stderr
        #[arg(long)]
        verbose: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
