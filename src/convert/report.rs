//! Per-column conversion outcomes

use serde::Serialize;

use crate::types::{ConcreteType, LogicalType};

/// What happened to one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ColumnAction {
    /// Storage type already matched; `inferred` is set for "infer" directives
    Unchanged {
        dtype: ConcreteType,
        #[serde(skip_serializing_if = "Option::is_none")]
        inferred: Option<LogicalType>,
    },
    /// Re-stored as the declared type
    Converted { from: ConcreteType, to: ConcreteType },
    /// Type inferred, then re-stored
    Inferred {
        logical: LogicalType,
        from: ConcreteType,
        to: ConcreteType,
    },
}

impl ColumnAction {
    /// Whether the column's storage changed
    pub fn is_change(&self) -> bool {
        !matches!(self, ColumnAction::Unchanged { .. })
    }

    /// Storage type after processing
    pub fn dtype(&self) -> ConcreteType {
        match self {
            ColumnAction::Unchanged { dtype, .. } => *dtype,
            ColumnAction::Converted { to, .. } | ColumnAction::Inferred { to, .. } => *to,
        }
    }
}

/// Outcome for one schema column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnOutcome {
    pub column: String,
    /// Directive text from the schema
    pub directive: &'static str,
    #[serde(flatten)]
    pub action: ColumnAction,
}

/// Outcomes for every processed column, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    outcomes: Vec<ColumnOutcome>,
}

impl ConversionReport {
    pub(crate) fn push(&mut self, outcome: ColumnOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ColumnOutcome] {
        &self.outcomes
    }

    /// Outcome for a named column
    pub fn get(&self, column: &str) -> Option<&ColumnOutcome> {
        self.outcomes.iter().find(|o| o.column == column)
    }

    /// Names of columns whose storage changed
    pub fn changed_columns(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| o.action.is_change())
            .map(|o| o.column.as_str())
            .collect()
    }

    /// True when no column changed
    pub fn is_noop(&self) -> bool {
        self.outcomes.iter().all(|o| !o.action.is_change())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
