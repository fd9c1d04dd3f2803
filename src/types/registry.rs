//! The type registry: which names a schema may use and what they store as.

use super::errors::{TypeResult, UnknownTypeError};
use super::logical::{ConcreteType, LogicalType};

/// Immutable catalog of accepted logical types.
///
/// Built once at startup and passed by reference. There is no mutation API;
/// a reduced catalog is a separate registry built with [`TypeRegistry::with_types`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    types: Vec<LogicalType>,
}

impl TypeRegistry {
    /// Registry with every known logical type.
    pub fn standard() -> Self {
        Self {
            types: LogicalType::ALL.to_vec(),
        }
    }

    /// Registry restricted to the given types. Duplicates are dropped and
    /// the first occurrence keeps its position.
    pub fn with_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = LogicalType>,
    {
        let mut registered: Vec<LogicalType> = Vec::new();
        for t in types {
            if !registered.contains(&t) {
                registered.push(t);
            }
        }
        Self { types: registered }
    }

    /// Builds a reduced registry from catalog names.
    ///
    /// Fails on the first name that is not a known logical type.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> TypeResult<Self> {
        let mut types = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let t = LogicalType::from_name(name).ok_or_else(|| {
                let known: Vec<&str> = LogicalType::ALL.iter().map(|t| t.name()).collect();
                UnknownTypeError::new(name, &known)
            })?;
            types.push(t);
        }
        Ok(Self::with_types(types))
    }

    /// True iff `name` is a registered type name. `"infer"` is never one.
    pub fn is_valid(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the registered logical type with this name.
    pub fn lookup(&self, name: &str) -> Option<LogicalType> {
        LogicalType::from_name(name).filter(|t| self.contains(*t))
    }

    /// True iff the type is part of this catalog.
    pub fn contains(&self, t: LogicalType) -> bool {
        self.types.contains(&t)
    }

    /// Returns the storage representation of a registered name.
    pub fn resolve(&self, name: &str) -> TypeResult<ConcreteType> {
        self.lookup(name)
            .map(|t| t.concrete())
            .ok_or_else(|| UnknownTypeError::new(name, &self.names()))
    }

    /// Registered names in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.types.iter().map(|t| t.name()).collect()
    }

    /// Registered types in catalog order.
    pub fn types(&self) -> &[LogicalType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
