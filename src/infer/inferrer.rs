//! Column type inference
//!
//! Rules, first match wins (nulls and NaN are skipped throughout):
//! 1. no values at all → no match
//! 2. all booleans → bool (object if bool is not registered)
//! 3. all integer-valued numbers within i64 range → int64
//! 4. all numbers → float64
//! 5. all text → string
//! 6. all timestamps → datetime
//! 7. anything else → mixed
//!
//! The candidate is then checked against the registry, trying its family in
//! catalog order:
//! - int64, int
//! - float64, float, floating
//! - string, str, mixed
//! - mixed, object
//! - bool, object
//!
//! No registered member of the family means `NoMatch`, never a silent default.

use serde_json::Value as JsonValue;
use std::fmt;

use crate::table::Value;
use crate::types::{LogicalType, TypeRegistry};

use super::errors::{InferError, InferResult};

/// Outcome of inferring one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceResult {
    /// A registered logical type fits every value
    Match(LogicalType),
    /// No registered type describes the column
    NoMatch,
}

impl InferenceResult {
    pub fn logical_type(&self) -> Option<LogicalType> {
        match self {
            InferenceResult::Match(t) => Some(*t),
            InferenceResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, InferenceResult::Match(_))
    }
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceResult::Match(t) => write!(f, "{}", t),
            InferenceResult::NoMatch => write!(f, "no match"),
        }
    }
}

/// Infers a column's logical type from its values.
///
/// Deterministic and total: the same values always give the same result,
/// and every finite sequence gives a result.
pub struct TypeInferrer<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TypeInferrer<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Infers the type of a column.
    pub fn infer(&self, values: &[Value]) -> InferenceResult {
        match classify(values) {
            Some(candidate) => self.admit(candidate),
            None => InferenceResult::NoMatch,
        }
    }

    /// Infers the type of a column given as a JSON array of scalars.
    ///
    /// # Errors
    ///
    /// `InferError::InvalidArgument` if the input is not an array, or an
    /// element is itself an array or object.
    pub fn infer_json(&self, raw: &JsonValue) -> InferResult<InferenceResult> {
        let values = values_from_json(raw)?;
        Ok(self.infer(&values))
    }

    fn admit(&self, candidate: LogicalType) -> InferenceResult {
        family(candidate)
            .iter()
            .copied()
            .find(|t| self.registry.contains(*t))
            .map_or(InferenceResult::NoMatch, InferenceResult::Match)
    }
}

/// Registered names that may stand in for a candidate, preferred first.
fn family(candidate: LogicalType) -> &'static [LogicalType] {
    use LogicalType::*;

    match candidate {
        Int64 => &[Int64, Int],
        Float64 => &[Float64, Float, Floating],
        String => &[String, Str, Mixed],
        Mixed => &[Mixed, Object],
        Bool => &[Bool, Object],
        Datetime => &[Datetime],
        // classify never proposes anything else
        _ => &[],
    }
}

/// Candidate type for the values, before the registry is consulted.
fn classify(values: &[Value]) -> Option<LogicalType> {
    let present: Vec<&Value> = values.iter().filter(|v| !v.is_null()).collect();
    if present.is_empty() {
        return None;
    }

    let all = |pred: fn(&Value) -> bool| present.iter().all(|v| pred(v));

    let candidate = if all(|v| matches!(v, Value::Bool(_))) {
        LogicalType::Bool
    } else if all(is_integer_valued) {
        LogicalType::Int64
    } else if all(Value::is_numeric) {
        LogicalType::Float64
    } else if all(|v| matches!(v, Value::Text(_))) {
        LogicalType::String
    } else if all(|v| matches!(v, Value::Timestamp(_))) {
        LogicalType::Datetime
    } else {
        LogicalType::Mixed
    };

    Some(candidate)
}

// 2^63 is exactly representable; anything at or above it overflows i64.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn is_integer_valued(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => {
            f.is_finite() && f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < I64_UPPER
        }
        _ => false,
    }
}

/// Converts a JSON array of scalars into column values.
pub fn values_from_json(raw: &JsonValue) -> InferResult<Vec<Value>> {
    let items = raw
        .as_array()
        .ok_or_else(|| InferError::invalid_argument(json_kind(raw)))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(b) => Ok(Value::Bool(*b)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::Int(i)),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .ok_or_else(|| InferError::invalid_element(i, "number")),
            },
            JsonValue::String(s) => Ok(Value::Text(s.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => {
                Err(InferError::invalid_element(i, json_kind(item)))
            }
        })
        .collect()
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn infer(values: Vec<Value>) -> InferenceResult {
        let registry = TypeRegistry::standard();
        TypeInferrer::new(&registry).infer(&values)
    }

    fn ts(day: u32) -> Value {
        Value::Timestamp(
            NaiveDate::from_ymd_opt(2020, 1, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_is_no_match() {
        assert_eq!(infer(vec![]), InferenceResult::NoMatch);
    }

    #[test]
    fn test_all_null_is_no_match() {
        assert_eq!(
            infer(vec![Value::Null, Value::Float(f64::NAN)]),
            InferenceResult::NoMatch
        );
    }

    #[test]
    fn test_booleans() {
        let result = infer(vec![Value::Bool(true), Value::Null, Value::Bool(false)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Bool));
    }

    #[test]
    fn test_booleans_fall_back_to_object() {
        let registry = TypeRegistry::with_types([LogicalType::Object, LogicalType::Int64]);
        let result = TypeInferrer::new(&registry).infer(&[Value::Bool(true)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Object));

        let registry = TypeRegistry::with_types([LogicalType::Int64]);
        let result = TypeInferrer::new(&registry).infer(&[Value::Bool(true)]);
        assert_eq!(result, InferenceResult::NoMatch);
    }

    #[test]
    fn test_integers() {
        let result = infer(vec![Value::Int(1), Value::Null, Value::Int(-3)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Int64));
    }

    #[test]
    fn test_whole_floats_are_integer_valued() {
        let result = infer(vec![Value::Float(1.0), Value::Int(2)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Int64));
    }

    #[test]
    fn test_any_fraction_forces_float() {
        let result = infer(vec![Value::Int(1), Value::Int(2), Value::Float(3.5)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Float64));
    }

    #[test]
    fn test_out_of_range_float_is_float() {
        let result = infer(vec![Value::Float(1e20), Value::Int(1)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Float64));
        let result = infer(vec![Value::Float(f64::INFINITY)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Float64));
    }

    #[test]
    fn test_text() {
        let result = infer(vec!["a".into(), Value::Null, "b".into()]);
        assert_eq!(result, InferenceResult::Match(LogicalType::String));
    }

    #[test]
    fn test_numeric_text_stays_text() {
        let result = infer(vec!["1".into(), "2".into()]);
        assert_eq!(result, InferenceResult::Match(LogicalType::String));
    }

    #[test]
    fn test_timestamps() {
        let result = infer(vec![ts(1), ts(2)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Datetime));
    }

    #[test]
    fn test_mixed() {
        let result = infer(vec![Value::Int(1), "a".into()]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Mixed));

        let result = infer(vec![Value::Bool(true), Value::Int(1)]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Mixed));
    }

    #[test]
    fn test_candidate_falls_back_to_registered_alias() {
        let registry = TypeRegistry::with_types([
            LogicalType::Str,
            LogicalType::Int,
            LogicalType::Float,
            LogicalType::Object,
        ]);
        let inferrer = TypeInferrer::new(&registry);

        assert_eq!(
            inferrer.infer(&["a".into(), "b".into()]),
            InferenceResult::Match(LogicalType::Str)
        );
        assert_eq!(
            inferrer.infer(&[Value::Int(1), Value::Int(2)]),
            InferenceResult::Match(LogicalType::Int)
        );
        assert_eq!(
            inferrer.infer(&[Value::Int(1), Value::Float(3.5)]),
            InferenceResult::Match(LogicalType::Float)
        );
        assert_eq!(
            inferrer.infer(&[Value::Int(1), "a".into()]),
            InferenceResult::Match(LogicalType::Object)
        );
    }

    #[test]
    fn test_text_falls_back_to_mixed() {
        let registry = TypeRegistry::with_types([LogicalType::Mixed]);
        let result = TypeInferrer::new(&registry).infer(&["a".into()]);
        assert_eq!(result, InferenceResult::Match(LogicalType::Mixed));
    }

    #[test]
    fn test_unregistered_family_is_no_match() {
        let registry = TypeRegistry::with_types([LogicalType::Str, LogicalType::Int]);
        let inferrer = TypeInferrer::new(&registry);
        assert_eq!(inferrer.infer(&[Value::Float(1.5)]), InferenceResult::NoMatch);
        assert_eq!(inferrer.infer(&[ts(1)]), InferenceResult::NoMatch);
    }

    #[test]
    fn test_deterministic() {
        let values = vec![Value::Int(1), Value::Float(2.5), Value::Null];
        let first = infer(values.clone());
        for _ in 0..50 {
            assert_eq!(infer(values.clone()), first);
        }
    }

    #[test]
    fn test_infer_json_array() {
        let registry = TypeRegistry::standard();
        let inferrer = TypeInferrer::new(&registry);
        let result = inferrer.infer_json(&json!([1, 2, 3.5])).unwrap();
        assert_eq!(result, InferenceResult::Match(LogicalType::Float64));
    }

    #[test]
    fn test_infer_json_rejects_non_sequence() {
        let registry = TypeRegistry::standard();
        let inferrer = TypeInferrer::new(&registry);

        let err = inferrer.infer_json(&json!("abc")).unwrap_err();
        assert!(matches!(err, InferError::InvalidArgument { .. }));

        let err = inferrer.infer_json(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, InferError::InvalidArgument { .. }));
    }

    #[test]
    fn test_infer_json_rejects_nested_values() {
        let registry = TypeRegistry::standard();
        let inferrer = TypeInferrer::new(&registry);
        let err = inferrer.infer_json(&json!([1, [2]])).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(InferenceResult::Match(LogicalType::Int64).to_string(), "int64");
        assert_eq!(InferenceResult::NoMatch.to_string(), "no match");
    }
}
