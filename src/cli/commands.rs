//! CLI command implementations
//!
//! Each command is a function from its inputs to the `data` payload of the
//! response; `run_command` handles stdin/stdout around it.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::Config;
use crate::convert::ConversionEngine;
use crate::infer::TypeInferrer;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::{Schema, SchemaLoader};
use crate::table::Table;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_error, write_response};

/// Parse arguments, run the command, report errors on stdout
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.command);
    if let Err(e) = &result {
        let _ = write_error(e.code_str(), e.message());
    }
    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let data = match cmd {
        Command::Types { config } => types(config.as_deref())?,
        Command::Check { schema, config } => check(&schema, config.as_deref())?,
        Command::Infer { config } => {
            let input = read_input()?;
            infer(&input, config.as_deref())?
        }
        Command::Convert {
            schema,
            config,
            verbose,
        } => {
            let input = read_input()?;
            convert(&schema, config.as_deref(), verbose, input)?
        }
    };
    write_response(data)
}

/// List the catalog: each name with its storage representation
pub fn types(config_path: Option<&Path>) -> CliResult<Value> {
    let registry = load_config(config_path)?.registry()?;

    let types: Vec<Value> = registry
        .types()
        .iter()
        .map(|t| json!({ "name": t.name(), "concrete": t.concrete() }))
        .collect();

    Ok(json!({ "types": types }))
}

/// Load a schema definition and report its columns and directives
pub fn check(schema_path: &Path, config_path: Option<&Path>) -> CliResult<Value> {
    let registry = load_config(config_path)?.registry()?;
    let schema = SchemaLoader::new(&registry).load_file(schema_path)?;
    Ok(schema_summary(&schema))
}

/// Infer the type of a JSON array of scalars
pub fn infer(input: &Value, config_path: Option<&Path>) -> CliResult<Value> {
    let registry = load_config(config_path)?.registry()?;
    let result = TypeInferrer::new(&registry).infer_json(input)?;

    Ok(match result.logical_type() {
        Some(t) => json!({ "match": true, "type": t.name(), "concrete": t.concrete() }),
        None => json!({ "match": false, "type": null, "concrete": null }),
    })
}

/// Convert a JSON table against a schema definition.
///
/// `verbose` turns the trace on even when the config leaves it off.
pub fn convert(
    schema_path: &Path,
    config_path: Option<&Path>,
    verbose: bool,
    input: Value,
) -> CliResult<Value> {
    let config = load_config(config_path)?;
    let verbose = config.verbose || verbose;
    let config = config.with_verbose(verbose);
    let registry = config.registry()?;

    let schema = SchemaLoader::new(&registry).load_file(schema_path)?;
    if verbose {
        let columns = schema.len().to_string();
        let path = schema_path.display().to_string();
        log_event_with_fields(
            Event::SchemaLoaded,
            &[("columns", columns.as_str()), ("path", path.as_str())],
        );
    }

    let mut table: Table =
        serde_json::from_value(input).map_err(|e| CliError::input_error(e.to_string()))?;

    let engine = ConversionEngine::new(&registry, config);
    let (converted, report) = match engine.run(&mut table, &schema)? {
        (Some(copy), report) => (copy, report),
        (None, report) => (table, report),
    };

    Ok(json!({ "table": converted, "report": report }))
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config = Config::load(path)?;
    if config.verbose {
        let shown = path.display().to_string();
        let in_place = if config.in_place { "true" } else { "false" };
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("in_place", in_place), ("path", shown.as_str())],
        );
    }
    Ok(config)
}

fn schema_summary(schema: &Schema) -> Value {
    json!({
        "columns": schema.columns(),
        "types": schema.types(),
        "schema": schema.to_string(),
    })
}
