//! The conversion engine
//!
//! For each schema column, in declaration order:
//! - declared type already stored → unchanged
//! - declared type differs → cast to the declared representation
//! - "infer" → infer, resolve through the registry, cast if needed
//!
//! Table/schema alignment is checked before any column is touched. Each
//! column is cast all-or-nothing, but columns processed before a failing
//! one keep their new type when converting in place.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::config::Config;
use crate::infer::TypeInferrer;
use crate::observability::{Event, Logger};
use crate::schema::{Directive, Schema, SchemaArgumentError, TableValidator};
use crate::table::Frame;
use crate::types::{LogicalType, TypeRegistry};

use super::errors::{ConversionError, ConversionResult};
use super::report::{ColumnAction, ColumnOutcome, ConversionReport};

/// Applies schemas to tables.
///
/// Holds no table state; one engine can convert any number of tables.
/// Not thread-safe: the trace writer is shared through a `RefCell`.
pub struct ConversionEngine<'a> {
    registry: &'a TypeRegistry,
    config: Config,
    trace: RefCell<Box<dyn Write + 'a>>,
}

impl<'a> ConversionEngine<'a> {
    /// Creates an engine. The verbose trace goes to stderr.
    pub fn new(registry: &'a TypeRegistry, config: Config) -> Self {
        Self {
            registry,
            config,
            trace: RefCell::new(Box::new(io::stderr())),
        }
    }

    /// Sends the verbose trace to `writer` instead of stderr.
    pub fn with_trace_writer<W: Write + 'a>(self, writer: W) -> Self {
        Self {
            trace: RefCell::new(Box::new(writer)),
            ..self
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.registry
    }

    /// Converts a copy of `table`. The original is never mutated.
    ///
    /// # Errors
    ///
    /// - `ConversionError::Schema` if the table does not line up with the
    ///   schema, or a directive is not in this engine's registry
    /// - `ConversionError::InferenceFailed` if an "infer" column has no
    ///   registered type
    /// - `ConversionError::NotRepresentable` if a value does not fit its
    ///   target type
    pub fn convert<T: Frame + Clone>(
        &self,
        table: &T,
        schema: &Schema,
    ) -> ConversionResult<(T, ConversionReport)> {
        let mut copy = table.clone();
        let report = self.apply(&mut copy, schema)?;
        Ok((copy, report))
    }

    /// Converts `table` in place.
    ///
    /// Errors are the same as [`ConversionEngine::convert`]. On error,
    /// columns before the failing one stay converted; the failing column
    /// is left as it was.
    pub fn convert_in_place<T: Frame + ?Sized>(
        &self,
        table: &mut T,
        schema: &Schema,
    ) -> ConversionResult<ConversionReport> {
        self.apply(table, schema)
    }

    /// Converts according to `Config::in_place`: returns the converted copy,
    /// or `None` after mutating `table` directly.
    pub fn run<T: Frame + Clone>(
        &self,
        table: &mut T,
        schema: &Schema,
    ) -> ConversionResult<(Option<T>, ConversionReport)> {
        if self.config.in_place {
            let report = self.convert_in_place(table, schema)?;
            Ok((None, report))
        } else {
            let (copy, report) = self.convert(table, schema)?;
            Ok((Some(copy), report))
        }
    }

    fn apply<T: Frame + ?Sized>(
        &self,
        table: &mut T,
        schema: &Schema,
    ) -> ConversionResult<ConversionReport> {
        let result = self.apply_columns(table, schema);
        if let Err(e) = &result {
            let reason = e.to_string();
            let mut fields = vec![("reason", reason.as_str())];
            if let Some(column) = e.column() {
                fields.push(("column", column));
            }
            self.trace(Event::ConversionFailed, &fields);
        }
        result
    }

    fn apply_columns<T: Frame + ?Sized>(
        &self,
        table: &mut T,
        schema: &Schema,
    ) -> ConversionResult<ConversionReport> {
        TableValidator::new(schema).validate(&*table)?;

        let columns = schema.columns().join(",");
        self.trace(Event::ConversionBegin, &[("columns", columns.as_str())]);

        let mut report = ConversionReport::default();
        for (column, directive) in schema.iter() {
            let outcome = self.convert_column(table, column, directive)?;
            self.trace_outcome(&outcome);
            report.push(outcome);
        }

        let changed = report.changed_columns().len().to_string();
        self.trace(Event::ConversionComplete, &[("changed", changed.as_str())]);
        Ok(report)
    }

    fn convert_column<T: Frame + ?Sized>(
        &self,
        table: &mut T,
        column: &str,
        directive: Directive,
    ) -> ConversionResult<ColumnOutcome> {
        let (current, inferred) = {
            let view = table
                .column(column)
                .ok_or_else(|| ConversionError::MissingColumn {
                    column: column.to_string(),
                })?;

            let inferred = match directive {
                Directive::Declared(declared) => {
                    if !self.registry.contains(declared) {
                        return Err(SchemaArgumentError::unknown_type(
                            declared.name(),
                            &self.registry.names(),
                        )
                        .into());
                    }
                    None
                }
                Directive::Infer => {
                    let logical = TypeInferrer::new(self.registry)
                        .infer(view.values)
                        .logical_type()
                        .ok_or_else(|| ConversionError::InferenceFailed {
                            column: column.to_string(),
                        })?;
                    Some(logical)
                }
            };

            (view.dtype, inferred)
        };

        let logical: LogicalType = match (directive, inferred) {
            (_, Some(logical)) => logical,
            (Directive::Declared(declared), None) => declared,
            (Directive::Infer, None) => {
                return Err(ConversionError::InferenceFailed {
                    column: column.to_string(),
                })
            }
        };
        let target = self.registry.resolve(logical.name())?;

        let action = if current == target {
            ColumnAction::Unchanged {
                dtype: current,
                inferred,
            }
        } else {
            table.set_column_type(column, target)?;
            match inferred {
                Some(logical) => ColumnAction::Inferred {
                    logical,
                    from: current,
                    to: target,
                },
                None => ColumnAction::Converted {
                    from: current,
                    to: target,
                },
            }
        };

        Ok(ColumnOutcome {
            column: column.to_string(),
            directive: directive.as_str(),
            action,
        })
    }

    fn trace_outcome(&self, outcome: &ColumnOutcome) {
        let column = outcome.column.as_str();
        match outcome.action {
            ColumnAction::Unchanged { dtype, .. } => self.trace(
                Event::ColumnUnchanged,
                &[("column", column), ("dtype", dtype.as_str())],
            ),
            ColumnAction::Converted { from, to } => self.trace(
                Event::ColumnConverted,
                &[("column", column), ("from", from.as_str()), ("to", to.as_str())],
            ),
            ColumnAction::Inferred { logical, from, to } => self.trace(
                Event::ColumnInferred,
                &[
                    ("column", column),
                    ("inferred", logical.name()),
                    ("from", from.as_str()),
                    ("to", to.as_str()),
                ],
            ),
        }
    }

    fn trace(&self, event: Event, fields: &[(&str, &str)]) {
        if !self.config.verbose {
            return;
        }
        let mut writer = self.trace.borrow_mut();
        Logger::write_to(&mut **writer, event.severity(), event.as_str(), fields);
    }
}
