//! Schema loader for reading schema definitions from JSON
//!
//! A definition file holds one object:
//!
//! ```json
//! { "columns": ["name", "age"], "types": ["str", "infer"] }
//! ```
//!
//! Unreadable or malformed files are SCHEMA_MALFORMED. A well-formed file
//! is then validated like any other schema construction.

use std::fs;
use std::path::Path;

use crate::types::TypeRegistry;

use super::errors::{SchemaArgumentError, SchemaResult};
use super::types::{Schema, SchemaDefinition};

/// Builds schemas from serialized definitions against one registry.
pub struct SchemaLoader<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> SchemaLoader<'a> {
    /// Creates a loader that validates directives against `registry`.
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Loads a schema definition file.
    pub fn load_file(&self, path: &Path) -> SchemaResult<Schema> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaArgumentError::malformed(
                path.display().to_string(),
                format!("failed to read file: {}", e),
            )
        })?;

        self.parse(&path.display().to_string(), &content)
    }

    /// Loads a schema definition from a JSON string.
    pub fn load_str(&self, json: &str) -> SchemaResult<Schema> {
        self.parse("<in-memory>", json)
    }

    fn parse(&self, source: &str, json: &str) -> SchemaResult<Schema> {
        let definition: SchemaDefinition = serde_json::from_str(json).map_err(|e| {
            SchemaArgumentError::malformed(source, format!("invalid JSON: {}", e))
        })?;

        Schema::from_definition(self.registry, &definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_str() {
        let registry = TypeRegistry::standard();
        let loader = SchemaLoader::new(&registry);
        let schema = loader
            .load_str(r#"{"columns": ["name", "age"], "types": ["str", "int"]}"#)
            .unwrap();
        assert_eq!(schema.columns(), vec!["name", "age"]);
        assert_eq!(schema.types(), vec!["str", "int"]);
    }

    #[test]
    fn test_load_file() {
        let registry = TypeRegistry::standard();
        let loader = SchemaLoader::new(&registry);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"columns": ["score"], "types": ["infer"]}}"#).unwrap();

        let schema = loader.load_file(file.path()).unwrap();
        assert_eq!(schema.types(), vec!["infer"]);
    }

    #[test]
    fn test_missing_file_is_malformed() {
        let registry = TypeRegistry::standard();
        let loader = SchemaLoader::new(&registry);
        let dir = tempfile::tempdir().unwrap();

        let err = loader.load_file(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::Malformed);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let registry = TypeRegistry::standard();
        let loader = SchemaLoader::new(&registry);
        let err = loader.load_str(r#"{"columns": ["a"]"#).unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::Malformed);
    }

    #[test]
    fn test_definition_still_validated() {
        let registry = TypeRegistry::standard();
        let loader = SchemaLoader::new(&registry);
        let err = loader
            .load_str(r#"{"columns": ["a", "b"], "types": ["str"]}"#)
            .unwrap_err();
        assert_eq!(err.code(), SchemaErrorCode::LengthMismatch);
    }
}
