//! Errors raised by the type catalog

use thiserror::Error;

/// Result type for catalog lookups
pub type TypeResult<T> = Result<T, UnknownTypeError>;

/// A type name was requested that the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type '{name}'; registered types: {registered}")]
pub struct UnknownTypeError {
    name: String,
    registered: String,
}

impl UnknownTypeError {
    pub fn new(name: impl Into<String>, registered: &[&str]) -> Self {
        Self {
            name: name.into(),
            registered: registered.join(", "),
        }
    }

    /// The name that failed to resolve
    pub fn name(&self) -> &str {
        &self.name
    }
}
