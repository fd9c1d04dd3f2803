//! Logical and concrete type definitions
//!
//! Logical names (what a schema declares):
//! - str, string, mixed: UTF-8 text
//! - int, int64: 64-bit signed integer
//! - int32: 32-bit signed integer
//! - byte: 8-bit signed integer
//! - float, floating, float64: 64-bit floating point
//! - float32: 32-bit floating point
//! - object: untyped values, stored as given
//! - datetime: calendar timestamp
//! - bool: boolean
//!
//! Several names share one representation. Each alias is its own variant so
//! the mapping stays an exhaustive match instead of a lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema directive that asks the engine to infer a column's type.
///
/// Never a registered type name.
pub const INFER_DIRECTIVE: &str = "infer";

/// A type name a schema may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "string")]
    String,
    /// Values of several kinds, kept as text
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "byte")]
    Byte,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "floating")]
    Floating,
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "object")]
    Object,
    #[serde(rename = "datetime")]
    Datetime,
    #[serde(rename = "bool")]
    Bool,
}

impl LogicalType {
    /// Every logical type, in catalog order.
    pub const ALL: [LogicalType; 14] = [
        LogicalType::Str,
        LogicalType::Int,
        LogicalType::Float,
        LogicalType::Object,
        LogicalType::Float64,
        LogicalType::Float32,
        LogicalType::Datetime,
        LogicalType::Int64,
        LogicalType::Int32,
        LogicalType::Byte,
        LogicalType::Floating,
        LogicalType::String,
        LogicalType::Mixed,
        LogicalType::Bool,
    ];

    /// Returns the catalog name
    pub fn name(&self) -> &'static str {
        match self {
            LogicalType::Str => "str",
            LogicalType::String => "string",
            LogicalType::Mixed => "mixed",
            LogicalType::Int => "int",
            LogicalType::Int32 => "int32",
            LogicalType::Int64 => "int64",
            LogicalType::Byte => "byte",
            LogicalType::Float => "float",
            LogicalType::Floating => "floating",
            LogicalType::Float32 => "float32",
            LogicalType::Float64 => "float64",
            LogicalType::Object => "object",
            LogicalType::Datetime => "datetime",
            LogicalType::Bool => "bool",
        }
    }

    /// Parses a catalog name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Returns the storage representation for this type
    pub fn concrete(&self) -> ConcreteType {
        match self {
            LogicalType::Str | LogicalType::String | LogicalType::Mixed => ConcreteType::Text,
            LogicalType::Int | LogicalType::Int64 => ConcreteType::Int64,
            LogicalType::Int32 => ConcreteType::Int32,
            LogicalType::Byte => ConcreteType::Int8,
            LogicalType::Float | LogicalType::Floating | LogicalType::Float64 => {
                ConcreteType::Float64
            }
            LogicalType::Float32 => ConcreteType::Float32,
            LogicalType::Object => ConcreteType::Object,
            LogicalType::Datetime => ConcreteType::Timestamp,
            LogicalType::Bool => ConcreteType::Bool,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Storage representation of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcreteType {
    /// UTF-8 text
    Text,
    /// 8-bit signed integer
    Int8,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Boolean
    Bool,
    /// Calendar timestamp without zone
    Timestamp,
    /// Untyped values
    Object,
}

impl ConcreteType {
    /// Returns the representation name for logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcreteType::Text => "text",
            ConcreteType::Int8 => "int8",
            ConcreteType::Int32 => "int32",
            ConcreteType::Int64 => "int64",
            ConcreteType::Float32 => "float32",
            ConcreteType::Float64 => "float64",
            ConcreteType::Bool => "bool",
            ConcreteType::Timestamp => "timestamp",
            ConcreteType::Object => "object",
        }
    }

    /// Inclusive bounds for the integer representations
    pub fn integer_bounds(&self) -> Option<(i64, i64)> {
        match self {
            ConcreteType::Int8 => Some((i8::MIN as i64, i8::MAX as i64)),
            ConcreteType::Int32 => Some((i32::MIN as i64, i32::MAX as i64)),
            ConcreteType::Int64 => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
