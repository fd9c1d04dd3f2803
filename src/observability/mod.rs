//! Observability for infercast
//!
//! Structured JSON-lines logging and typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on conversion results
//! 3. Synchronous, no background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use infercast::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::SchemaLoaded, &[("columns", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event to stderr
pub fn log_event(event: Event) {
    Logger::log_stderr(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields to stderr
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log_stderr(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Only verifies no panic
        log_event(Event::ConversionBegin);
        log_event(Event::ConversionComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("in_place", "false")]);
    }
}
