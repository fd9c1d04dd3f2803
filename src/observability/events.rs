//! Observable events
//!
//! Events are explicit and typed; each has one fixed log name.

use std::fmt;

use super::logger::Severity;

/// Observable events during a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Setup
    /// Configuration loaded
    ConfigLoaded,
    /// Schema loaded and validated
    SchemaLoaded,

    // Conversion
    /// Table/schema alignment passed, columns about to be processed
    ConversionBegin,
    /// Column already had the declared representation
    ColumnUnchanged,
    /// Column re-stored as its declared type
    ColumnConverted,
    /// Column type inferred, then re-stored
    ColumnInferred,
    /// Every column processed
    ConversionComplete,
    /// Conversion stopped on an error
    ConversionFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaLoaded => "SCHEMA_LOADED",
            Event::ConversionBegin => "CONVERSION_BEGIN",
            Event::ColumnUnchanged => "COLUMN_UNCHANGED",
            Event::ColumnConverted => "COLUMN_CONVERTED",
            Event::ColumnInferred => "COLUMN_INFERRED",
            Event::ConversionComplete => "CONVERSION_COMPLETE",
            Event::ConversionFailed => "CONVERSION_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConversionFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
