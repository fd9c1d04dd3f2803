//! Conversion configuration
//!
//! Loaded from a JSON file; every field has a default:
//!
//! ```json
//! { "in_place": false, "verbose": false, "types": ["str", "int64", "float64"] }
//! ```
//!
//! `types` restricts the catalog. When absent, the full catalog is used.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{TypeRegistry, TypeResult};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Mutate the caller's table instead of returning a converted copy
    #[serde(default)]
    pub in_place: bool,

    /// Emit one trace line per column
    #[serde(default)]
    pub verbose: bool,

    /// Restrict the catalog to these type names (default: every type)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if let Some(types) = &self.types {
            if types.is_empty() {
                return Err(ConfigError::Invalid("types must not be empty".into()));
            }
            self.registry()
                .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        }
        Ok(())
    }

    /// Builds the registry this configuration asks for.
    pub fn registry(&self) -> TypeResult<TypeRegistry> {
        match &self.types {
            Some(names) => TypeRegistry::from_names(names.as_slice()),
            None => Ok(TypeRegistry::standard()),
        }
    }

    pub fn with_in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
