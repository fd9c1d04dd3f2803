//! Schema Invariant Tests
//!
//! - Construction fails fast on bad arguments, in a fixed order
//! - Directives are case-sensitive catalog names or "infer"
//! - A schema matches a table only on identical names in identical order
//! - Schema definitions load from JSON files

use infercast::schema::{
    Directive, Schema, SchemaDefinition, SchemaErrorCode, SchemaLoader, TableValidator,
};
use infercast::table::{Column, Table};
use infercast::types::{LogicalType, TypeRegistry};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn people() -> Table {
    Table::new(vec![
        Column::new("name", vec!["a", "b", "c"]),
        Column::new("age", vec!["1", "2", "3"]),
    ])
    .unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

/// Valid arguments build a schema in declaration order.
#[test]
fn test_schema_keeps_declaration_order() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["str", "infer", "int"], &["name", "score", "age"]).unwrap();

    assert_eq!(schema.columns(), vec!["name", "score", "age"]);
    assert_eq!(
        schema.directives(),
        vec![
            Directive::Declared(LogicalType::Str),
            Directive::Infer,
            Directive::Declared(LogicalType::Int),
        ]
    );
}

/// Both lists empty is an argument error.
#[test]
fn test_empty_arguments_rejected() {
    let registry = TypeRegistry::standard();
    let none: [&str; 0] = [];
    let err = Schema::new(&registry, &none, &none).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::ArgumentsRequired);
}

/// An unknown directive is reported before a length mismatch.
#[test]
fn test_unknown_type_checked_before_length() {
    let registry = TypeRegistry::standard();
    let err = Schema::new(&registry, &["str", "decimal"], &["a"]).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::UnknownType);
    assert_eq!(err.directive(), Some("decimal"));
}

/// Lists of different length are rejected.
#[test]
fn test_length_mismatch() {
    let registry = TypeRegistry::standard();
    let err = Schema::new(&registry, &["str"], &["a", "b"]).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::LengthMismatch);
}

/// Directive matching is case-sensitive.
#[test]
fn test_directives_are_case_sensitive() {
    let registry = TypeRegistry::standard();
    assert!(Schema::new(&registry, &["Int"], &["a"]).is_err());
    assert!(Schema::new(&registry, &["INFER"], &["a"]).is_err());
}

/// A reduced registry rejects directives outside it.
#[test]
fn test_reduced_registry_rejects_directive() {
    let registry = TypeRegistry::with_types([LogicalType::Str, LogicalType::Int]);
    assert!(Schema::new(&registry, &["str", "int", "infer"], &["a", "b", "c"]).is_ok());

    let err = Schema::new(&registry, &["float"], &["a"]).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::UnknownType);
}

/// Building the same schema twice gives equal schemas.
#[test]
fn test_construction_is_deterministic() {
    let registry = TypeRegistry::standard();
    let a = Schema::new(&registry, &["str", "infer"], &["name", "score"]).unwrap();
    for _ in 0..100 {
        let b = Schema::new(&registry, &["str", "infer"], &["name", "score"]).unwrap();
        assert_eq!(a, b);
    }
}

/// A schema round-trips through its serialized definition.
#[test]
fn test_definition_round_trip() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["str", "infer"], &["name", "score"]).unwrap();

    let definition = schema.to_definition();
    let json = serde_json::to_value(&definition).unwrap();
    assert_eq!(json, json!({ "columns": ["name", "score"], "types": ["str", "infer"] }));

    let parsed: SchemaDefinition = serde_json::from_value(json).unwrap();
    assert_eq!(Schema::from_definition(&registry, &parsed).unwrap(), schema);
}

// =============================================================================
// Table Matching Tests
// =============================================================================

/// Identical names in identical order match.
#[test]
fn test_matching_table_passes() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["str", "int"], &["name", "age"]).unwrap();
    assert!(TableValidator::new(&schema).validate(&people()).is_ok());
}

/// Column count is checked first.
#[test]
fn test_column_count_mismatch() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["str"], &["name"]).unwrap();

    let err = TableValidator::new(&schema).validate(&people()).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::ColumnCountMismatch);
}

/// Same names in a different order do not match.
#[test]
fn test_column_order_matters() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["int", "str"], &["age", "name"]).unwrap();

    let err = TableValidator::new(&schema).validate(&people()).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::ColumnsNotIdentical);
}

/// Names are compared exactly.
#[test]
fn test_column_names_case_sensitive() {
    let registry = TypeRegistry::standard();
    let schema = Schema::new(&registry, &["str", "int"], &["Name", "age"]).unwrap();

    let err = TableValidator::new(&schema).validate(&people()).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::ColumnsNotIdentical);
}

// =============================================================================
// Loader Tests
// =============================================================================

/// A schema file loads into the same schema as direct construction.
#[test]
fn test_load_schema_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("schema.json");
    fs::write(
        &path,
        json!({ "columns": ["name", "age"], "types": ["str", "int"] }).to_string(),
    )
    .unwrap();

    let registry = TypeRegistry::standard();
    let loaded = SchemaLoader::new(&registry).load_file(&path).unwrap();
    let direct = Schema::new(&registry, &["str", "int"], &["name", "age"]).unwrap();
    assert_eq!(loaded, direct);
}

/// Malformed JSON is a schema error, not a panic.
#[test]
fn test_malformed_schema_file() {
    let registry = TypeRegistry::standard();
    let err = SchemaLoader::new(&registry)
        .load_str("{\"columns\": [\"a\"]")
        .unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::Malformed);
}

/// A missing file is reported as malformed.
#[test]
fn test_missing_schema_file() {
    let tmp = TempDir::new().unwrap();
    let registry = TypeRegistry::standard();
    let err = SchemaLoader::new(&registry)
        .load_file(&tmp.path().join("absent.json"))
        .unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::Malformed);
}
