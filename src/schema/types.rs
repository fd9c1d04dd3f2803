//! Schema definitions
//!
//! A schema is an ordered list of (column, directive) pairs. A directive is
//! either a declared logical type or the "infer" directive. Columns are
//! matched against a table by position and by name; they need not be unique
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{LogicalType, TypeRegistry, INFER_DIRECTIVE};

use super::errors::{SchemaArgumentError, SchemaResult};

/// What a schema asks for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Store the column as this type
    Declared(LogicalType),
    /// Infer the type from the column's values
    Infer,
}

impl Directive {
    /// Parses a directive against a registry.
    pub fn parse(directive: &str, registry: &TypeRegistry) -> SchemaResult<Self> {
        if directive == INFER_DIRECTIVE {
            return Ok(Directive::Infer);
        }
        registry
            .lookup(directive)
            .map(Directive::Declared)
            .ok_or_else(|| SchemaArgumentError::unknown_type(directive, &registry.names()))
    }

    /// Returns the directive text as written in the schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Declared(t) => t.name(),
            Directive::Infer => INFER_DIRECTIVE,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialized schema form: `{"columns": [...], "types": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Column names in table order
    pub columns: Vec<String>,
    /// One directive per column
    pub types: Vec<String>,
}

/// Validated, immutable mapping from column to directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<(String, Directive)>,
}

impl Schema {
    /// Builds a schema from parallel lists of directives and column names.
    ///
    /// # Errors
    ///
    /// Returns `SchemaArgumentError` if:
    /// - either list is empty (SCHEMA_ARGUMENTS_REQUIRED)
    /// - a directive is neither registered nor "infer" (SCHEMA_UNKNOWN_TYPE)
    /// - the lists differ in length (SCHEMA_LENGTH_MISMATCH)
    pub fn new<T, C>(registry: &TypeRegistry, types: &[T], columns: &[C]) -> SchemaResult<Self>
    where
        T: AsRef<str>,
        C: AsRef<str>,
    {
        if types.is_empty() || columns.is_empty() {
            return Err(SchemaArgumentError::arguments_required());
        }

        let directives = types
            .iter()
            .map(|t| Directive::parse(t.as_ref(), registry))
            .collect::<SchemaResult<Vec<_>>>()?;

        if directives.len() != columns.len() {
            return Err(SchemaArgumentError::length_mismatch(
                directives.len(),
                columns.len(),
            ));
        }

        let entries = columns
            .iter()
            .map(|c| c.as_ref().to_string())
            .zip(directives)
            .collect();

        Ok(Self { entries })
    }

    /// Builds a schema from its serialized form.
    pub fn from_definition(
        registry: &TypeRegistry,
        definition: &SchemaDefinition,
    ) -> SchemaResult<Self> {
        Self::new(
            registry,
            definition.types.as_slice(),
            definition.columns.as_slice(),
        )
    }

    /// Column names in declaration order
    pub fn columns(&self) -> Vec<String> {
        self.entries.iter().map(|(c, _)| c.clone()).collect()
    }

    /// Directive texts in declaration order
    pub fn types(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(_, d)| d.as_str()).collect()
    }

    /// Parsed directives in declaration order
    pub fn directives(&self) -> Vec<Directive> {
        self.entries.iter().map(|(_, d)| *d).collect()
    }

    /// (column, directive) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Directive)> {
        self.entries.iter().map(|(c, d)| (c.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialized form of this schema
    pub fn to_definition(&self) -> SchemaDefinition {
        SchemaDefinition {
            columns: self.columns(),
            types: self.types().into_iter().map(String::from).collect(),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema(")?;
        for (i, (column, directive)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", column, directive)?;
        }
        write!(f, ")")
    }
}
